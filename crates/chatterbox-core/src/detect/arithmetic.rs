//! Arithmetic detector.
//!
//! Strips a message down to digits and operators, then evaluates what is
//! left with a small recursive-descent parser:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | power
//! power   := primary ('^' unary)?
//! primary := number | '(' expr ')' | '√' '(' expr ')'
//! ```
//!
//! Only this fixed grammar is accepted; nothing in the message is ever
//! executed. Nesting deeper than [`MAX_DEPTH`] levels is not applicable.

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Why a sanitized expression could not be evaluated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArithmeticError {
    #[error("empty expression")]
    Empty,

    #[error("malformed number '{0}'")]
    BadNumber(String),

    #[error("unexpected token at position {0}")]
    Unexpected(usize),

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("result is not finite")]
    NonFinite,

    #[error("expression nested too deeply")]
    TooDeep,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Keep only the characters the evaluator understands.
///
/// This is also the expression echoed back to the user, so the displayed
/// text and the evaluated text are always the same string.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.' | '^' | '√'))
        .collect()
}

/// Evaluate the arithmetic embedded in `text`.
///
/// Returns the result formatted as a number string, or `None` when the
/// sanitized text is not a valid expression or the result is not finite.
pub fn evaluate(text: &str) -> Option<String> {
    try_evaluate(&sanitize(text)).ok().map(format_number)
}

/// Evaluate an already-sanitized expression.
pub fn try_evaluate(expression: &str) -> Result<f64, ArithmeticError> {
    let tokens = tokenize(expression)?;
    if tokens.is_empty() {
        return Err(ArithmeticError::Empty);
    }

    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        depth: 0,
    };
    let value = parser.expr()?;
    if parser.pos != tokens.len() {
        return Err(ArithmeticError::Unexpected(parser.pos));
    }
    if !value.is_finite() {
        return Err(ArithmeticError::NonFinite);
    }
    Ok(value)
}

/// Format a result the way a JavaScript number prints: shortest round-trip
/// digits, exponent form outside `[1e-6, 1e21)`, and no negative zero.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{value:e}");
        match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => formatted,
        }
    } else {
        format!("{value}")
    }
}

// ---------------------------------------------------------------------------
// Lexer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Num(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    Root,
    LParen,
    RParen,
}

fn tokenize(expression: &str) -> Result<Vec<Token>, ArithmeticError> {
    let chars: Vec<char> = expression.chars().collect();
    let mut tokens = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let token = match c {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '^' => Token::Caret,
            '√' => Token::Root,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '0'..='9' | '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                let literal: String = chars[start..i].iter().collect();
                tokens.push(Token::Num(parse_number(&literal)?));
                continue;
            }
            _ => return Err(ArithmeticError::Unexpected(i)),
        };
        tokens.push(token);
        i += 1;
    }

    Ok(tokens)
}

fn parse_number(literal: &str) -> Result<f64, ArithmeticError> {
    let dots = literal.matches('.').count();
    if dots > 1 || literal == "." {
        return Err(ArithmeticError::BadNumber(literal.to_string()));
    }
    literal
        .parse::<f64>()
        .map_err(|_| ArithmeticError::BadNumber(literal.to_string()))
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Maximum nesting of parentheses, roots, signs and exponents.
///
/// Every nested level passes through `unary`, which enforces the bound.
pub const MAX_DEPTH: usize = 128;

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Result<Token, ArithmeticError> {
        let token = self.peek().ok_or(ArithmeticError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(token)
    }

    fn expect(&mut self, expected: Token) -> Result<(), ArithmeticError> {
        let at = self.pos;
        if self.next()? == expected {
            Ok(())
        } else {
            Err(ArithmeticError::Unexpected(at))
        }
    }

    fn expr(&mut self) -> Result<f64, ArithmeticError> {
        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    value += self.term()?;
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<f64, ArithmeticError> {
        let mut value = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    value *= self.unary()?;
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    value /= self.unary()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn unary(&mut self) -> Result<f64, ArithmeticError> {
        if self.depth >= MAX_DEPTH {
            return Err(ArithmeticError::TooDeep);
        }
        self.depth += 1;
        let value = self.signed();
        self.depth -= 1;
        value
    }

    fn signed(&mut self) -> Result<f64, ArithmeticError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.pos += 1;
                Ok(-self.unary()?)
            }
            Some(Token::Plus) => {
                self.pos += 1;
                self.unary()
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<f64, ArithmeticError> {
        let base = self.primary()?;
        if self.peek() == Some(Token::Caret) {
            self.pos += 1;
            // Right associative: 2^3^2 == 2^(3^2).
            let exponent = self.unary()?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<f64, ArithmeticError> {
        let at = self.pos;
        match self.next()? {
            Token::Num(n) => Ok(n),
            Token::LParen => {
                let value = self.expr()?;
                self.expect(Token::RParen)?;
                Ok(value)
            }
            Token::Root => {
                self.expect(Token::LParen)?;
                let value = self.expr()?;
                self.expect(Token::RParen)?;
                Ok(value.sqrt())
            }
            _ => Err(ArithmeticError::Unexpected(at)),
        }
    }
}
