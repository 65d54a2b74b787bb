//! Generates synthetic ini files of specified line counts for benchmarking

pub fn generate_config(target_lines: usize) -> String {
    // Preamble plus one header; the loop below subtracts up to 2 from this
    let target_lines = target_lines.max(3);
    let mut output = String::with_capacity(target_lines * 40);

    // Header comment
    output.push_str("; Synthetic benchmark config\n");
    output.push('\n');

    let mut lines = 2;
    let mut section_num = 0;

    while lines < target_lines {
        // New section every ~25 lines, alternating one- and two-segment names
        if section_num % 2 == 0 {
            output.push_str(&format!("[Section{}]\n", letters(section_num)));
        } else {
            output.push_str(&format!("[Engine.Part{}]\n", letters(section_num)));
        }
        section_num += 1;
        lines += 1;
        if lines >= target_lines {
            break;
        }

        let records_in_section = (target_lines - lines).clamp(1, 23);
        for i in 0..records_in_section {
            if lines >= target_lines - 1 {
                break;
            }
            let id = (section_num - 1) * 25 + i;
            match i % 5 {
                0 => output.push_str(&format!("Value{}={}\n", id, id * 10)),
                1 => output.push_str(&format!("Repeated=(R={},G={},B=0,A=1)\n", id % 256, (id * 2) % 256)),
                2 => output.push_str(&format!("Repeated=(R=0,G={},B={},A=1) ; shade {}\n", id % 256, (id * 3) % 256, id)),
                3 => output.push_str(&format!("# note {}\n", id)),
                4 => output.push_str(&format!("Flag{}={}\n", id, if id % 2 == 0 { "True" } else { "False" })),
                _ => unreachable!(),
            }
            lines += 1;
        }

        // Blank line between sections
        if lines < target_lines - 2 {
            output.push('\n');
            lines += 1;
        }
    }

    output
}

/// Alphabetic suffix for a section number (header segments allow letters only)
fn letters(mut n: usize) -> String {
    let mut out = Vec::new();
    loop {
        out.push((b'A' + (n % 26) as u8) as char);
        n /= 26;
        if n == 0 {
            break;
        }
    }
    out.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::generate_config;

    #[test]
    fn test_generate_small() {
        let config = generate_config(50);
        let lines = config.lines().count();
        assert!((48..=52).contains(&lines), "Got {} lines", lines);
    }

    #[test]
    fn test_generate_large() {
        let config = generate_config(1000);
        let lines = config.lines().count();
        assert!((998..=1002).contains(&lines), "Got {} lines", lines);
    }

    #[test]
    fn test_tiny_targets() {
        for target in 0..4 {
            assert!(generate_config(target).starts_with("; Synthetic benchmark config\n"));
        }
    }

    #[test]
    fn test_parseable() {
        let config = generate_config(100);
        assert!(config.contains("[SectionA]"));
        assert!(config.contains("[Engine.PartB]"));
        assert!(config.contains("Repeated="));
    }
}
