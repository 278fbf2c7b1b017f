//! Path data parser using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use super::ast::{Mode, PathCommand, PathData, Point};
use super::lexer::{lex, Token};
use crate::error::PathError;

/// Parse an SVG path `d` attribute into typed commands
///
/// Empty or whitespace-only input yields empty path data. Any other input
/// must start with a moveto.
pub fn parse(input: &str) -> Result<PathData, Vec<PathError>> {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    for (tok, span) in lex(input) {
        match tok {
            Ok(tok) => tokens.push((tok, span)),
            Err(()) => errors.push(PathError::InvalidToken { span }),
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    match tokens.first() {
        None => return Ok(PathData::default()),
        Some((Token::Command('M' | 'm'), _)) => {}
        Some((_, span)) => {
            return Err(vec![PathError::MissingMoveTo { span: span.clone() }]);
        }
    }

    let len = input.len();
    let token_iter = tokens.into_iter().map(|(tok, span)| (tok, span.into()));
    let token_stream = Stream::from_iter(token_iter)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    let commands = path_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(PathError::from).collect::<Vec<_>>())?;

    tracing::trace!(commands = commands.len(), "parsed path data");
    Ok(PathData::new(commands))
}

/// Match one command letter in either case
fn command<'a, I>(upper: char) -> impl Parser<'a, I, Mode, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let lower = upper.to_ascii_lowercase();
    select! {
        Token::Command(c) if c == upper => Mode::Absolute,
        Token::Command(c) if c == lower => Mode::Relative,
    }
}

fn path_parser<'a, I>() -> impl Parser<'a, I, Vec<PathCommand>, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let number = select! {
        Token::Number(n) => n,
    };

    let point = number
        .clone()
        .then(number.clone())
        .map(|(x, y)| Point::new(x, y));

    let flag = number.clone().try_map(|n, span| {
        if n == 0.0 {
            Ok(false)
        } else if n == 1.0 {
            Ok(true)
        } else {
            Err(Rich::custom(span, "arc flag must be 0 or 1"))
        }
    });

    // Extra pairs after a moveto are implicit linetos in the same mode
    let move_to = command('M')
        .then(point.clone().repeated().at_least(1).collect::<Vec<_>>())
        .map(|(mode, points)| {
            points
                .into_iter()
                .enumerate()
                .map(|(i, to)| {
                    if i == 0 {
                        PathCommand::MoveTo { mode, to }
                    } else {
                        PathCommand::LineTo { mode, to }
                    }
                })
                .collect::<Vec<_>>()
        });

    let close = command('Z').to(vec![PathCommand::ClosePath]);

    let line_to = command('L')
        .then(point.clone().repeated().at_least(1).collect::<Vec<_>>())
        .map(|(mode, points)| {
            points
                .into_iter()
                .map(|to| PathCommand::LineTo { mode, to })
                .collect::<Vec<_>>()
        });

    let horizontal = command('H')
        .then(number.clone().repeated().at_least(1).collect::<Vec<_>>())
        .map(|(mode, xs)| {
            xs.into_iter()
                .map(|x| PathCommand::HorizontalTo { mode, x })
                .collect::<Vec<_>>()
        });

    let vertical = command('V')
        .then(number.clone().repeated().at_least(1).collect::<Vec<_>>())
        .map(|(mode, ys)| {
            ys.into_iter()
                .map(|y| PathCommand::VerticalTo { mode, y })
                .collect::<Vec<_>>()
        });

    let cubic = command('C')
        .then(
            point
                .clone()
                .then(point.clone())
                .then(point.clone())
                .repeated()
                .at_least(1)
                .collect::<Vec<_>>(),
        )
        .map(|(mode, groups)| {
            groups
                .into_iter()
                .map(|((ctrl1, ctrl2), to)| PathCommand::CubicTo {
                    mode,
                    ctrl1,
                    ctrl2,
                    to,
                })
                .collect::<Vec<_>>()
        });

    let smooth_cubic = command('S')
        .then(
            point
                .clone()
                .then(point.clone())
                .repeated()
                .at_least(1)
                .collect::<Vec<_>>(),
        )
        .map(|(mode, groups)| {
            groups
                .into_iter()
                .map(|(ctrl2, to)| PathCommand::SmoothCubicTo { mode, ctrl2, to })
                .collect::<Vec<_>>()
        });

    let quadratic = command('Q')
        .then(
            point
                .clone()
                .then(point.clone())
                .repeated()
                .at_least(1)
                .collect::<Vec<_>>(),
        )
        .map(|(mode, groups)| {
            groups
                .into_iter()
                .map(|(ctrl, to)| PathCommand::QuadraticTo { mode, ctrl, to })
                .collect::<Vec<_>>()
        });

    let smooth_quadratic = command('T')
        .then(point.clone().repeated().at_least(1).collect::<Vec<_>>())
        .map(|(mode, points)| {
            points
                .into_iter()
                .map(|to| PathCommand::SmoothQuadraticTo { mode, to })
                .collect::<Vec<_>>()
        });

    let arc = command('A')
        .then(
            number
                .clone()
                .then(number.clone())
                .then(number.clone())
                .then(flag.clone())
                .then(flag)
                .then(point)
                .repeated()
                .at_least(1)
                .collect::<Vec<_>>(),
        )
        .map(|(mode, groups)| {
            groups
                .into_iter()
                .map(
                    |(((((rx, ry), x_axis_rotation), large_arc), sweep), to)| PathCommand::ArcTo {
                        mode,
                        rx,
                        ry,
                        x_axis_rotation,
                        large_arc,
                        sweep,
                        to,
                    },
                )
                .collect::<Vec<_>>()
        });

    choice((
        move_to,
        close,
        line_to,
        horizontal,
        vertical,
        cubic,
        smooth_cubic,
        quadratic,
        smooth_quadratic,
        arc,
    ))
    .repeated()
    .collect::<Vec<_>>()
    .then_ignore(end())
    .map(|groups| groups.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_and_close() {
        let data = parse("M10 20z").expect("Should parse");
        assert_eq!(
            data.commands,
            vec![
                PathCommand::MoveTo {
                    mode: Mode::Absolute,
                    to: Point::new(10.0, 20.0)
                },
                PathCommand::ClosePath
            ]
        );
    }

    #[test]
    fn test_parse_empty_input() {
        let data = parse("  ").expect("Should parse");
        assert!(data.is_empty());
    }

    #[test]
    fn test_moveto_extra_pairs_become_linetos() {
        let data = parse("m1 2 3 4 5 6").expect("Should parse");
        assert_eq!(data.len(), 3);
        assert!(matches!(
            data.commands[0],
            PathCommand::MoveTo {
                mode: Mode::Relative,
                ..
            }
        ));
        assert_eq!(
            data.commands[2],
            PathCommand::LineTo {
                mode: Mode::Relative,
                to: Point::new(5.0, 6.0)
            }
        );
    }

    #[test]
    fn test_repeated_horizontal_arguments() {
        let data = parse("M0 0H10 20 30").expect("Should parse");
        assert_eq!(data.len(), 4);
        assert_eq!(
            data.commands[3],
            PathCommand::HorizontalTo {
                mode: Mode::Absolute,
                x: 30.0
            }
        );
    }

    #[test]
    fn test_parse_arc_flags() {
        let data = parse("M0 0a16 16 0 0 1 16-16").expect("Should parse");
        assert_eq!(
            data.commands[1],
            PathCommand::ArcTo {
                mode: Mode::Relative,
                rx: 16.0,
                ry: 16.0,
                x_axis_rotation: 0.0,
                large_arc: false,
                sweep: true,
                to: Point::new(16.0, -16.0),
            }
        );
    }

    #[test]
    fn test_parse_curves() {
        let data = parse("M0 0C1 2 3 4 5 6S7 8 9 10Q1 1 2 2T3 3").expect("Should parse");
        let letters: String = data.commands.iter().map(|c| c.letter()).collect();
        assert_eq!(letters, "MCSQT");
    }

    #[test]
    fn test_invalid_arc_flag_is_error() {
        let errors = parse("M0 0A16 16 0 2 0 1 1").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], PathError::Syntax { .. }));
    }

    #[test]
    fn test_missing_arguments_is_error() {
        let errors = parse("M0 0L10").unwrap_err();
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_must_start_with_moveto() {
        let errors = parse("L10 10").unwrap_err();
        assert_eq!(errors, vec![PathError::MissingMoveTo { span: 0..1 }]);
    }

    #[test]
    fn test_invalid_character_reports_span() {
        let errors = parse("M0 0 L5 5 ?").unwrap_err();
        assert_eq!(errors, vec![PathError::InvalidToken { span: 10..11 }]);
    }
}
