#[cfg(test)]
mod tests {
    use crate::console::*;

    const SAMPLE: &[Equation] = &[Equation {
        name: "Energy Level",
        formula: "Eₙ = -Z²·R_H / n²",
        description: "Bound-state energy",
    }];

    #[test]
    fn test_rule_and_banner() {
        assert_eq!(rule('=', 4), "====");

        let text = banner("TITLE");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "TITLE");
        assert_eq!(lines[0].chars().count(), RULE_WIDTH);
    }

    #[test]
    fn test_section_starts_with_blank_line() {
        let text = section("Energy levels");
        assert!(text.starts_with('\n'));
        assert!(text.contains("Energy levels"));
    }

    #[test]
    fn test_equations_panel_lists_everything() {
        let text = equations_panel("Bohr", SAMPLE, &[("Z", "atomic number"), ("R_H", "Rydberg energy")]);
        assert!(text.contains("Energy Level"));
        assert!(text.contains("Eₙ = -Z²·R_H / n²"));
        assert!(text.contains("(Bound-state energy)"));
        assert!(text.contains("  Z    atomic number"));
        assert!(text.contains("  R_H  Rydberg energy"));
    }

    #[test]
    fn test_equations_panel_without_variables() {
        let text = equations_panel("Bohr", SAMPLE, &[]);
        assert!(!text.contains("Variables"));
    }

    #[test]
    fn test_table_alignment() {
        let mut table = Table::new(["n", "E (eV)"]).align(0, Align::Left);
        table.push_row(["1", "-13.606"]);
        table.push_row(["10", "-0.136"]);
        assert_eq!(table.len(), 2);

        let text = table.render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "n   E (eV)");
        assert_eq!(lines[1], "-----------");
        assert_eq!(lines[2], "1   -13.606");
        assert_eq!(lines[3], "10   -0.136");
    }

    #[test]
    fn test_table_pads_short_rows() {
        let mut table = Table::new(["a", "b", "c"]);
        table.push_row(["x"]);
        table.push_row(["1", "2", "3", "4"]);

        let text = table.render();
        assert_eq!(text.lines().nth(2), Some("x"));
        assert_eq!(text.lines().nth(3), Some("1  2  3"));
        assert!(!table.is_empty());
    }
}
