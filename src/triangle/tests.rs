#![cfg(test)]

use super::*;

#[test]
fn test_known_shapes() {
    assert_eq!(right('*', 5).unwrap(), "*\n**\n***\n**\n*");
    assert_eq!(left('*', 5).unwrap(), "  *\n **\n***\n **\n  *");
    assert_eq!(up('*', 5).unwrap(), "  *\n ***\n*****");
    assert_eq!(down('*', 5).unwrap(), "*****\n ***\n  *");
}

#[test]
fn test_smallest_size() {
    for orientation in Orientation::ALL {
        assert_eq!(
            draw(orientation, '$', 1).unwrap(),
            "$",
            "A triangle of size 1 should be a single symbol."
        );
    }
}

#[test]
fn test_even_sizes_rejected() {
    for orientation in Orientation::ALL {
        for size in [0, 2, 4, 10, 100] {
            assert_eq!(
                draw(orientation, '*', size),
                Err(InvalidSizeError { size }),
                "Even sizes should be rejected for every orientation."
            );
            assert!(orientation.rows(size).is_err());
        }
    }

    let error = right('*', 4).unwrap_err();
    assert_eq!(error.to_string(), "size must be an odd number");
    assert_eq!(error.size, 4, "The rejected size should be kept on the error.");
}

#[test]
fn test_row_counts() {
    for size in (1..=21).step_by(2) {
        for orientation in Orientation::ALL {
            let drawn = draw(orientation, '*', size).unwrap();
            let expected = match orientation {
                Orientation::Right | Orientation::Left => size,
                Orientation::Up | Orientation::Down => (size + 1) / 2,
            };

            assert_eq!(
                drawn.lines().count(),
                expected,
                "A {orientation} triangle of size {size} should have {expected} rows."
            );
            assert!(!drawn.ends_with('\n'), "There should be no trailing line break.");
            assert_eq!(orientation.rows(size).unwrap().len(), expected);
        }
    }
}

#[test]
fn test_sideways_symmetry() {
    for size in (1..=15).step_by(2) {
        for orientation in [Orientation::Right, Orientation::Left] {
            let rows: Vec<Row> = orientation.rows(size).unwrap().collect();
            for i in 0..size {
                assert_eq!(
                    rows[i],
                    rows[size - 1 - i],
                    "Row {i} should mirror row {} in a {orientation} triangle.",
                    size - 1 - i
                );
            }
            let widest = rows.iter().map(|row| row.count).max();
            assert_eq!(
                rows[size / 2].count,
                size.div_ceil(2),
                "The middle row should hold (size + 1) / 2 symbols."
            );
            assert_eq!(
                widest,
                Some(size.div_ceil(2)),
                "No row should be wider than the middle one."
            );
        }
    }
}

#[test]
fn test_up_and_down_mirror() {
    for size in (1..=15).step_by(2) {
        let up_rows: Vec<Row> = Orientation::Up.rows(size).unwrap().collect();
        let down_rows: Vec<Row> = Orientation::Down.rows(size).unwrap().rev().collect();
        assert_eq!(up_rows, down_rows, "Down should be Up read from the bottom.");

        for row in &up_rows {
            assert_eq!(
                row.offset * 2 + row.count,
                size,
                "Up rows should be centred on a line of {size} columns."
            );
        }
    }
}

#[test]
fn test_draw_row() {
    let mut buffer = String::new();
    draw_row(&mut buffer, '*', 2, 5);
    assert_eq!(buffer, "  *****\n");

    draw_row(&mut buffer, 'é', 0, 2);
    assert_eq!(buffer, "  *****\néé\n", "Rows should append rather than overwrite.");

    let mut buffer = String::new();
    Row::new(3, 0).render_into(&mut buffer, '#');
    assert_eq!(buffer, "   \n");
}

#[test]
fn test_idempotent() {
    for orientation in Orientation::ALL {
        assert_eq!(
            draw(orientation, '@', 9),
            draw(orientation, '@', 9),
            "Drawing should be a pure function of its inputs."
        );
    }
}

#[test]
fn test_named_functions_match_draw() {
    for orientation in Orientation::ALL {
        assert_eq!(orientation.draw_fn()('+', 7), draw(orientation, '+', 7));
    }
}

#[test]
fn test_parse_orientation() {
    for orientation in Orientation::ALL {
        assert_eq!(orientation.to_string().parse(), Ok(orientation));
    }
    assert_eq!(" UP ".parse(), Ok(Orientation::Up));
    assert_eq!(
        "sideways".parse::<Orientation>(),
        Err(ParseOrientationError { input: "sideways".to_owned() })
    );
}

#[test]
fn test_large_and_wide_symbols() {
    let drawn = down('█', 101).unwrap();
    let lines: Vec<&str> = drawn.lines().collect();
    assert_eq!(lines.len(), 51);
    assert_eq!(lines[0], "█".repeat(101));
    assert_eq!(
        lines[50],
        format!("{}█", " ".repeat(50)),
        "The last row of a down triangle should be its tip."
    );

    assert_eq!(left('x', 7).unwrap(), "   x\n  xx\n xxx\nxxxx\n xxx\n  xx\n   x");
}
