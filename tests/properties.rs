use objscale::{rescale_buffered, Summary};

use proptest::prelude::*;

fn rescale_str(input: &str, factor: f64) -> (String, Summary) {
    let mut output = Vec::new();
    let summary = rescale_buffered(input.as_bytes(), &mut output, factor).unwrap();
    (String::from_utf8(output).unwrap(), summary)
}

fn coordinates() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6..1.0e6f64, 1..6)
}

fn vertex_line(coordinates: &[f64]) -> String {
    let text = coordinates
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    format!("v {text}\n")
}

fn parse_vertex_payload(line: &str) -> Vec<f64> {
    line.strip_prefix("v ")
        .unwrap()
        .split(' ')
        .map(|token| token.parse().unwrap())
        .collect()
}

fn relative_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1.0e-12 + 1.0e-12 * a.abs().max(b.abs())
}

proptest! {
    #[test]
    fn vertex_coordinates_are_multiplied(
        coordinates in coordinates(),
        factor in -1.0e3..1.0e3f64,
    ) {
        let (output, _) = rescale_str(&vertex_line(&coordinates), factor);
        let scaled = parse_vertex_payload(output.trim_end());

        prop_assert_eq!(scaled.len(), coordinates.len());
        for (scaled, original) in scaled.iter().zip(&coordinates) {
            // Display output of f64 parses back to the same value, so the
            // comparison is exact.
            prop_assert_eq!(*scaled, original * factor);
        }
    }

    #[test]
    fn identity_factor_preserves_values(coordinates in coordinates()) {
        let (output, _) = rescale_str(&vertex_line(&coordinates), 1.0);
        prop_assert_eq!(parse_vertex_payload(output.trim_end()), coordinates);
    }

    #[test]
    fn pass_through_lines_are_untouched(
        lines in prop::collection::vec("[#fgo][ -~]{0,24}", 0..8),
        factor in -1.0e3..1.0e3f64,
    ) {
        let input: String = lines.iter().map(|line| format!("{line}\n")).collect();
        let (output, summary) = rescale_str(&input, factor);

        prop_assert_eq!(output, input);
        prop_assert_eq!(summary.vertices, 0);
    }

    #[test]
    fn line_count_is_preserved(
        entries in prop::collection::vec(
            prop_oneof![
                coordinates().prop_map(Ok::<_, String>),
                "[#fgo][ -~]{0,24}".prop_map(Err::<Vec<f64>, _>),
            ],
            0..12,
        ),
        factor in -1.0e3..1.0e3f64,
    ) {
        let input: String = entries
            .iter()
            .map(|entry| match entry {
                Ok(coordinates) => vertex_line(coordinates),
                Err(other) => format!("{other}\n"),
            })
            .collect();

        let (output, summary) = rescale_str(&input, factor);

        prop_assert_eq!(output.lines().count(), entries.len());
        prop_assert_eq!(summary.lines, entries.len());
    }

    #[test]
    fn scaling_twice_composes(
        coordinates in coordinates(),
        first in -1.0e2..1.0e2f64,
        second in -1.0e2..1.0e2f64,
    ) {
        let line = vertex_line(&coordinates);

        let (once, _) = rescale_str(&line, first * second);
        let (intermediate, _) = rescale_str(&line, first);
        let (twice, _) = rescale_str(&intermediate, second);

        let once = parse_vertex_payload(once.trim_end());
        let twice = parse_vertex_payload(twice.trim_end());

        prop_assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            prop_assert!(relative_eq(*a, *b), "{} != {}", a, b);
        }
    }
}
