//! Logos-based lexer for Thrift/Frugal IDL
//!
//! Fast tokenization using the logos crate.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    #[regex(r"#[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[+-]?[0-9]+")]
    #[regex(r"[+-]?0[xX][0-9a-fA-F]+")]
    Integer,

    #[regex(r"[+-]?[0-9]*\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"[+-]?[0-9]+[eE][+-]?[0-9]+")]
    Double,

    #[regex(r#""([^"\\]|\\.)*""#)]
    #[regex(r"'([^'\\]|\\.)*'")]
    String,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("=")]
    Eq,
    #[token(".")]
    Dot,
    #[token("*")]
    Star,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("include")]
    Include,
    #[token("cpp_include")]
    CppInclude,
    #[token("namespace")]
    Namespace,
    #[token("const")]
    Const,
    #[token("typedef")]
    Typedef,
    #[token("enum")]
    Enum,
    #[token("struct")]
    Struct,
    #[token("union")]
    Union,
    #[token("exception")]
    Exception,
    #[token("service")]
    Service,
    #[token("scope")]
    Scope,
    #[token("extends")]
    Extends,
    #[token("throws")]
    Throws,
    #[token("oneway")]
    Oneway,
    #[token("required")]
    Required,
    #[token("optional")]
    Optional,
    #[token("prefix")]
    Prefix,
    #[token("map")]
    Map,
    #[token("set")]
    Set,
    #[token("list")]
    List,
    #[token("true")]
    True,
    #[token("false")]
    False,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            // Trivia
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,

            // Literals
            Ident => SyntaxKind::IDENT,
            Integer => SyntaxKind::INTEGER,
            Double => SyntaxKind::DOUBLE,
            String => SyntaxKind::STRING,

            // Punctuation
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            Lt => SyntaxKind::LT,
            Gt => SyntaxKind::GT,
            Comma => SyntaxKind::COMMA,
            Semicolon => SyntaxKind::SEMICOLON,
            Colon => SyntaxKind::COLON,
            Eq => SyntaxKind::EQ,
            Dot => SyntaxKind::DOT,
            Star => SyntaxKind::STAR,

            // Keywords
            Include => SyntaxKind::INCLUDE_KW,
            CppInclude => SyntaxKind::CPP_INCLUDE_KW,
            Namespace => SyntaxKind::NAMESPACE_KW,
            Const => SyntaxKind::CONST_KW,
            Typedef => SyntaxKind::TYPEDEF_KW,
            Enum => SyntaxKind::ENUM_KW,
            Struct => SyntaxKind::STRUCT_KW,
            Union => SyntaxKind::UNION_KW,
            Exception => SyntaxKind::EXCEPTION_KW,
            Service => SyntaxKind::SERVICE_KW,
            Scope => SyntaxKind::SCOPE_KW,
            Extends => SyntaxKind::EXTENDS_KW,
            Throws => SyntaxKind::THROWS_KW,
            Oneway => SyntaxKind::ONEWAY_KW,
            Required => SyntaxKind::REQUIRED_KW,
            Optional => SyntaxKind::OPTIONAL_KW,
            Prefix => SyntaxKind::PREFIX_KW,
            Map => SyntaxKind::MAP_KW,
            Set => SyntaxKind::SET_KW,
            List => SyntaxKind::LIST_KW,
            True => SyntaxKind::TRUE_KW,
            False => SyntaxKind::FALSE_KW,
        }
    }
}
