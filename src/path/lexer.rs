//! Lexer for SVG path data using logos

use logos::Logos;

use super::ast::Span;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\x0C,]+")]
pub enum Token {
    #[regex(r"[MmLlHhVvCcSsQqTtAaZz]", |lex| lex.slice().chars().next())]
    Command(char),

    // A sign always starts a new number, so "0-16" lexes as 0 and -16
    #[regex(r"[-+]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][-+]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),
}

/// Lex path data into tokens with spans, keeping invalid input as `Err`
pub fn lex(input: &str) -> impl Iterator<Item = (Result<Token, ()>, Span)> + '_ {
    Token::lexer(input).spanned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        lex(input).filter_map(|(tok, _)| tok.ok()).collect()
    }

    #[test]
    fn test_command_letters() {
        assert_eq!(
            tokens("M m z Z"),
            vec![
                Token::Command('M'),
                Token::Command('m'),
                Token::Command('z'),
                Token::Command('Z')
            ]
        );
    }

    #[test]
    fn test_sign_splits_numbers() {
        assert_eq!(
            tokens("0-16"),
            vec![Token::Number(0.0), Token::Number(-16.0)]
        );
        assert_eq!(
            tokens("48-48"),
            vec![Token::Number(48.0), Token::Number(-48.0)]
        );
    }

    #[test]
    fn test_letter_glued_to_number() {
        assert_eq!(
            tokens("v320a48"),
            vec![
                Token::Command('v'),
                Token::Number(320.0),
                Token::Command('a'),
                Token::Number(48.0)
            ]
        );
    }

    #[test]
    fn test_commas_are_separators() {
        assert_eq!(
            tokens("10,20"),
            vec![Token::Number(10.0), Token::Number(20.0)]
        );
    }

    #[test]
    fn test_fractions_and_exponents() {
        assert_eq!(
            tokens(".5 1.25 2e2"),
            vec![
                Token::Number(0.5),
                Token::Number(1.25),
                Token::Number(200.0)
            ]
        );
    }

    #[test]
    fn test_invalid_character_is_error_with_span() {
        let lexed: Vec<_> = lex("M0 0 #").collect();
        let (tok, span) = lexed.last().cloned().expect("token");
        assert!(tok.is_err());
        assert_eq!(span, 5..6);
    }
}
