use logos::{Lexer, Logos};

use crate::{
    ast::{Operator, Position},
    error::LexError,
};

/// The language's keywords.
///
/// `Var`, `Const` and `Fn` come from `<...>` annotations and carry the type
/// name written inside them, if any: `<const int>` is `Const(Some("int"))`,
/// `<bool fn>` is `Fn(Some("bool"))` and a bare type such as `<str>` declares
/// a mutable variable, `Var(Some("str"))`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keyword {
    /// `<var>`, `<var T>` or `<T>`.
    Var(Option<String>),
    /// `<const>` or `<const T>`.
    Const(Option<String>),
    /// `<fn>` or `<T fn>`.
    Fn(Option<String>),
    /// `if`
    If,
    /// `elif`
    Elif,
    /// `else`
    Else,
    /// `while`
    While,
    /// `for`
    For,
    /// `->`, the return arrow. Also separates a control keyword from its
    /// header.
    Return,
}

/// A numeric literal. A literal with a `.` is a float, anything else an
/// integer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// `25`
    Integer(i64),
    /// `2.5`
    Float(f64),
}

/// Why a callback rejected its input. Turned into a positioned
/// [`LexError`] by [`tokenize`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// No pattern matched.
    #[default]
    UnexpectedCharacter,
    /// A string literal has no closing quote.
    UnterminatedString,
    /// A `<...>` annotation has an unsupported shape.
    InvalidAnnotation,
    /// An integer literal overflows `i64`.
    NumberTooLarge,
}

/// The kind of a lexical token.
///
/// Longest match wins; on equal length a literal `#[token]` beats a
/// `#[regex]`, which is what keeps `if` from lexing as an identifier and
/// `<==` from lexing as `<=` followed by `=`.
///
/// Declaration annotations are not matched here: a lone `<` lexes as
/// [`Operator::Less`] and [`tokenize`] widens it to a keyword when an
/// annotation follows.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    /// Keywords, declaration annotations and function markers.
    #[token("if", |_| Keyword::If)]
    #[token("elif", |_| Keyword::Elif)]
    #[token("else", |_| Keyword::Else)]
    #[token("while", |_| Keyword::While)]
    #[token("for", |_| Keyword::For)]
    #[token("->", |_| Keyword::Return)]
    Keyword(Keyword),
    /// Variable, function and type names such as `age` or `isValidAge`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Numeric literals such as `25` or `2.5`. No sign, no exponent.
    #[regex(r"[0-9]+(\.[0-9]+)?", number)]
    Number(Number),
    /// Double-quoted string literals. The payload excludes the quotes; no
    /// escape sequences are processed.
    #[token("\"", string)]
    String(String),
    /// Operators from the fixed lexeme table.
    #[token("<==", |_| Operator::Assign)]
    #[token("<:", |_| Operator::TypeOpen)]
    #[token(":>", |_| Operator::TypeClose)]
    #[token("<+>", |_| Operator::Add)]
    #[token("<->", |_| Operator::Sub)]
    #[token("<*>", |_| Operator::Mul)]
    #[token("</>", |_| Operator::Div)]
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token("<&&>", |_| Operator::And)]
    #[token("<||>", |_| Operator::Or)]
    #[token("<!!>", |_| Operator::Not)]
    #[token("&&", |_| Operator::And)]
    #[token("||", |_| Operator::Or)]
    #[token("!!", |_| Operator::Not)]
    #[token("<=>", |_| Operator::Equal)]
    #[token("<!=>", |_| Operator::NotEqual)]
    #[token("<>>", |_| Operator::Greater)]
    #[token("<<>", |_| Operator::Less)]
    #[token("<>=>", |_| Operator::GreaterEqual)]
    #[token("<<=>", |_| Operator::LessEqual)]
    #[token("==", |_| Operator::Equal)]
    #[token("!=", |_| Operator::NotEqual)]
    #[token(">", |_| Operator::Greater)]
    #[token("<", |_| Operator::Less)]
    #[token(">=", |_| Operator::GreaterEqual)]
    #[token("<=", |_| Operator::LessEqual)]
    Operator(Operator),
    /// Single-character punctuation.
    #[token("(", |_| '(')]
    #[token(")", |_| ')')]
    #[token("{", |_| '{')]
    #[token("}", |_| '}')]
    #[token("[", |_| '[')]
    #[token("]", |_| ']')]
    #[token(",", |_| ',')]
    #[token(".", |_| '.')]
    #[token(":", |_| ':')]
    #[token(";", |_| ';')]
    Punctuation(char),
    /// `:: to end of line` or `::> ... <::`.
    #[token("::", line_comment)]
    #[token("::>", block_comment)]
    Comment,
    /// End of input. Always the last token of a sequence.
    Eof,
}

/// A token with its source text and position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What the token is.
    pub kind:   TokenKind,
    /// The exact source slice, quotes and brackets included.
    pub text:   String,
    /// 1-based line of the first character.
    pub line:   usize,
    /// 1-based column of the first character.
    pub column: usize,
}

impl Token {
    /// Where the token starts.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Returns `true` for `Punctuation(c)`.
    #[must_use]
    pub fn is_punctuation(&self, c: char) -> bool {
        self.kind == TokenKind::Punctuation(c)
    }

    /// Returns `true` for `Operator(op)`.
    #[must_use]
    pub fn is_operator(&self, op: Operator) -> bool {
        self.kind == TokenKind::Operator(op)
    }

    /// How the token reads in a diagnostic.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_string(),
            _ => format!("'{}'", self.text),
        }
    }
}

/// Byte offsets of line starts, for turning spans into line/column pairs.
struct LineIndex<'s> {
    source: &'s str,
    starts: Vec<usize>,
}

impl<'s> LineIndex<'s> {
    fn new(source: &'s str) -> Self {
        let starts = std::iter::once(0).chain(source.match_indices('\n').map(|(i, _)| i + 1))
                                        .collect();
        Self { source, starts }
    }

    fn position(&self, offset: usize) -> Position {
        let line = match self.starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let column = self.source[self.starts[line]..offset].chars().count() + 1;
        Position::new(line + 1, column)
    }
}

/// Converts source text into a token sequence ending in [`TokenKind::Eof`].
///
/// Comments are kept as [`TokenKind::Comment`] tokens; the parser discards
/// them. Whitespace produces no tokens.
///
/// A `<` starts an annotation only when a word follows it directly and a
/// `>` closes it on the same line: `<const int>` and `<bool fn>` are
/// keywords, while `a < b > 0` and `i < len(items)` are comparisons. Note
/// that `a <b> c` reads as an annotation.
///
/// # Errors
/// Fails on the first character sequence no pattern accepts, on an
/// unterminated string, on a malformed `<...>` annotation, and on an
/// integer literal that overflows `i64`.
///
/// # Example
/// ```
/// use arrow_lang::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("x <== 5").unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[0].kind, TokenKind::Identifier("x".to_string()));
/// assert_eq!(tokens[3].kind, TokenKind::Eof);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let index = LineIndex::new(source);
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let start = lexer.span().start;
        let position = index.position(start);

        let result = match result {
            Ok(TokenKind::Operator(Operator::Less)) => match annotation_len(lexer.remainder()) {
                Some(len) => {
                    lexer.bump(len);
                    annotation(lexer.slice()).map(TokenKind::Keyword)
                },
                None => Ok(TokenKind::Operator(Operator::Less)),
            },
            other => other,
        };

        match result {
            Ok(kind) => tokens.push(Token { kind,
                                            text: lexer.slice().to_string(),
                                            line: position.line,
                                            column: position.column }),
            Err(kind) => return Err(lex_error(kind, &source[start..], lexer.slice(), position)),
        }
    }

    let end = index.position(source.len());
    tokens.push(Token { kind:   TokenKind::Eof,
                        text:   String::new(),
                        line:   end.line,
                        column: end.column, });

    log::trace!("lexed {} tokens", tokens.len());
    Ok(tokens)
}

fn lex_error(kind: LexErrorKind, rest: &str, slice: &str, position: Position) -> LexError {
    match kind {
        LexErrorKind::UnexpectedCharacter => {
            LexError::UnexpectedCharacter { character: rest.chars().next().unwrap_or('\0'),
                                            position }
        },
        LexErrorKind::UnterminatedString => LexError::UnterminatedString { position },
        LexErrorKind::InvalidAnnotation => LexError::InvalidAnnotation { text: slice.to_string(),
                                                                         position },
        LexErrorKind::NumberTooLarge => LexError::NumberTooLarge { text: slice.to_string(),
                                                                   position },
    }
}

/// Words that may not appear as the type inside an annotation.
fn is_type_name(word: &str) -> bool {
    !matches!(word, "var" | "const" | "fn" | "if" | "elif" | "else" | "while" | "for")
}

const fn is_word_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// Length of `word ([ \t]+ word)? [ \t]* >` at the start of `rest`, the
/// text right after a `<`. `None` when `rest` does not start that way.
fn annotation_len(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let word = |from: usize| {
        bytes[from..].iter()
                     .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
                     .count()
    };
    let blank = |from: usize| bytes[from..].iter().take_while(|b| matches!(b, b' ' | b'\t')).count();

    if !bytes.first().copied().is_some_and(is_word_start) {
        return None;
    }

    let mut end = word(0);
    let gap = blank(end);
    if bytes.get(end + gap).copied().is_some_and(is_word_start) {
        end += gap;
        end += word(end);
    }
    end += blank(end);

    (bytes.get(end) == Some(&b'>')).then_some(end + 1)
}

/// Interprets the words between `<` and `>`.
fn annotation(slice: &str) -> Result<Keyword, LexErrorKind> {
    let words = slice[1..slice.len() - 1].split_whitespace().collect::<Vec<_>>();

    match words.as_slice() {
        ["var"] => Ok(Keyword::Var(None)),
        ["const"] => Ok(Keyword::Const(None)),
        ["fn"] => Ok(Keyword::Fn(None)),
        ["var", ty] if is_type_name(ty) => Ok(Keyword::Var(Some((*ty).to_string()))),
        ["const", ty] if is_type_name(ty) => Ok(Keyword::Const(Some((*ty).to_string()))),
        [ty, "fn"] if is_type_name(ty) => Ok(Keyword::Fn(Some((*ty).to_string()))),
        [ty] if is_type_name(ty) => Ok(Keyword::Var(Some((*ty).to_string()))),
        _ => Err(LexErrorKind::InvalidAnnotation),
    }
}

fn number(lex: &Lexer<TokenKind>) -> Result<Number, LexErrorKind> {
    let slice = lex.slice();
    if slice.contains('.') {
        slice.parse().map(Number::Float).map_err(|_| LexErrorKind::NumberTooLarge)
    } else {
        slice.parse().map(Number::Integer).map_err(|_| LexErrorKind::NumberTooLarge)
    }
}

/// Consumes up to and including the closing quote.
fn string(lex: &mut Lexer<TokenKind>) -> Result<String, LexErrorKind> {
    let Some(end) = lex.remainder().find('"') else {
        lex.bump(lex.remainder().len());
        return Err(LexErrorKind::UnterminatedString);
    };
    let content = lex.remainder()[..end].to_string();
    lex.bump(end + 1);
    Ok(content)
}

/// Consumes up to, not including, the next newline.
fn line_comment(lex: &mut Lexer<TokenKind>) {
    let rest = lex.remainder();
    lex.bump(rest.find('\n').unwrap_or(rest.len()));
}

/// Consumes up to and including `<::`. Unterminated blocks run to end of
/// input.
fn block_comment(lex: &mut Lexer<TokenKind>) {
    let rest = lex.remainder();
    lex.bump(rest.find("<::").map_or(rest.len(), |end| end + 3));
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn declaration_annotations() {
        assert_eq!(kinds("<const int> x"),
                   vec![TokenKind::Keyword(Keyword::Const(Some("int".into()))),
                        TokenKind::Identifier("x".into()),
                        TokenKind::Eof]);
        assert_eq!(kinds("<var>")[0], TokenKind::Keyword(Keyword::Var(None)));
        assert_eq!(kinds("<str>")[0], TokenKind::Keyword(Keyword::Var(Some("str".into()))));
        assert_eq!(kinds("<bool fn>")[0], TokenKind::Keyword(Keyword::Fn(Some("bool".into()))));
        assert_eq!(kinds("<fn>")[0], TokenKind::Keyword(Keyword::Fn(None)));
    }

    #[test]
    fn type_annotation_form() {
        assert_eq!(kinds("age <: int :> <== 25"),
                   vec![TokenKind::Identifier("age".into()),
                        TokenKind::Operator(Operator::TypeOpen),
                        TokenKind::Identifier("int".into()),
                        TokenKind::Operator(Operator::TypeClose),
                        TokenKind::Operator(Operator::Assign),
                        TokenKind::Number(Number::Integer(25)),
                        TokenKind::Eof]);
    }

    #[test]
    fn longest_operator_wins() {
        assert_eq!(kinds("<== <= <=> <<=> < <<>"),
                   vec![TokenKind::Operator(Operator::Assign),
                        TokenKind::Operator(Operator::LessEqual),
                        TokenKind::Operator(Operator::Equal),
                        TokenKind::Operator(Operator::LessEqual),
                        TokenKind::Operator(Operator::Less),
                        TokenKind::Operator(Operator::Less),
                        TokenKind::Eof]);
        assert_eq!(kinds("-> - <->"),
                   vec![TokenKind::Keyword(Keyword::Return),
                        TokenKind::Operator(Operator::Sub),
                        TokenKind::Operator(Operator::Sub),
                        TokenKind::Eof]);
    }

    #[test]
    fn comparison_is_not_an_annotation() {
        assert_eq!(kinds("i < count {"),
                   vec![TokenKind::Identifier("i".into()),
                        TokenKind::Operator(Operator::Less),
                        TokenKind::Identifier("count".into()),
                        TokenKind::Punctuation('{'),
                        TokenKind::Eof]);
    }

    #[test]
    fn comparison_chains_are_not_annotations() {
        let chain = vec![TokenKind::Identifier("a".into()),
                         TokenKind::Operator(Operator::Less),
                         TokenKind::Identifier("b".into()),
                         TokenKind::Operator(Operator::Greater),
                         TokenKind::Number(Number::Integer(0)),
                         TokenKind::Eof];
        assert_eq!(kinds("a < b > 0"), chain);
        assert_eq!(kinds("a < b >= c")[3], TokenKind::Operator(Operator::GreaterEqual));
        assert_eq!(kinds("(a < b) > 0")[2], TokenKind::Operator(Operator::Less));
        assert_eq!(kinds("a<b"),
                   vec![TokenKind::Identifier("a".into()),
                        TokenKind::Operator(Operator::Less),
                        TokenKind::Identifier("b".into()),
                        TokenKind::Eof]);
        assert_eq!(kinds("print(i < n)")[3], TokenKind::Operator(Operator::Less));
        assert_eq!(kinds("while -> i<len(items) {")[3], TokenKind::Operator(Operator::Less));
    }

    #[test]
    fn annotation_text_covers_the_brackets() {
        let tokens = tokenize("<const  int > x").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Const(Some("int".into()))));
        assert_eq!(tokens[0].text, "<const  int >");
        assert_eq!(tokens[1].position(), Position::new(1, 15));
    }

    #[test]
    fn keywords_beat_identifiers_only_on_exact_match() {
        assert_eq!(kinds("if iffy"),
                   vec![TokenKind::Keyword(Keyword::If),
                        TokenKind::Identifier("iffy".into()),
                        TokenKind::Eof]);
    }

    #[test]
    fn numbers_and_strings() {
        assert_eq!(kinds("2.5 7 \"hi there\""),
                   vec![TokenKind::Number(Number::Float(2.5)),
                        TokenKind::Number(Number::Integer(7)),
                        TokenKind::String("hi there".into()),
                        TokenKind::Eof]);
    }

    #[test]
    fn comments_are_tokens() {
        let tokens = tokenize(":: note\nx ::> spans\nlines <:: y").unwrap();
        let kinds = tokens.iter().map(|t| &t.kind).collect::<Vec<_>>();
        assert_eq!(kinds,
                   vec![&TokenKind::Comment,
                        &TokenKind::Identifier("x".into()),
                        &TokenKind::Comment,
                        &TokenKind::Identifier("y".into()),
                        &TokenKind::Eof]);
        assert_eq!(tokens[0].text, ":: note");
        assert_eq!(tokens[2].text, "::> spans\nlines <::");
        assert_eq!(tokens[3].position(), Position::new(3, 11));
    }

    #[test]
    fn positions_are_one_based() {
        let tokens = tokenize("a <== 1\n  bb <== 2").unwrap();
        assert_eq!(tokens[0].position(), Position::new(1, 1));
        assert_eq!(tokens[1].position(), Position::new(1, 3));
        assert_eq!(tokens[3].position(), Position::new(2, 3));
        assert_eq!(tokens.last().unwrap().position(), Position::new(2, 11));
    }

    #[test]
    fn unexpected_character_is_an_error() {
        assert_eq!(tokenize("x <== 1\ny <== #").unwrap_err(),
                   LexError::UnexpectedCharacter { character: '#',
                                                   position:  Position::new(2, 7), });
    }

    #[test]
    fn unterminated_string_is_an_error() {
        assert_eq!(tokenize("x <== \"open").unwrap_err(),
                   LexError::UnterminatedString { position: Position::new(1, 7) });
    }

    #[test]
    fn malformed_annotation_is_an_error() {
        assert!(matches!(tokenize("<int str> x"),
                         Err(LexError::InvalidAnnotation { .. })));
    }

    #[test]
    fn oversized_integer_is_an_error() {
        assert!(matches!(tokenize("99999999999999999999"),
                         Err(LexError::NumberTooLarge { .. })));
    }

    #[test]
    fn token_text_reproduces_source() {
        let source = "<const str> name <== \"Arrow Lang\"\ntotal <== 10 <+> 5 <*> 2\n\
                      <bool fn> ok(<const int> n) { -> n >= 18 }";
        let rebuilt = tokenize(source).unwrap()
                                      .iter()
                                      .map(|t| t.text.as_str())
                                      .collect::<String>();
        let strip = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        assert_eq!(strip(&rebuilt), strip(source));
    }
}
