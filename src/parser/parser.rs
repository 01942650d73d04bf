//! Recursive descent parser for Thrift/Frugal IDL
//!
//! Builds a rowan GreenNode tree from tokens.
//! Supports error recovery and produces a lossless CST.

use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use rowan::{GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// Parse IDL source code into a CST
pub fn parse(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens, TextSize::of(input));
    parser.parse_source_file();
    parser.finish()
}

/// Tokens that can start a top-level item
const ITEM_START: &[SyntaxKind] = &[
    SyntaxKind::INCLUDE_KW,
    SyntaxKind::CPP_INCLUDE_KW,
    SyntaxKind::NAMESPACE_KW,
    SyntaxKind::CONST_KW,
    SyntaxKind::TYPEDEF_KW,
    SyntaxKind::ENUM_KW,
    SyntaxKind::STRUCT_KW,
    SyntaxKind::UNION_KW,
    SyntaxKind::EXCEPTION_KW,
    SyntaxKind::SERVICE_KW,
    SyntaxKind::SCOPE_KW,
];

const FIELD_START: &[SyntaxKind] = &[
    SyntaxKind::INTEGER,
    SyntaxKind::REQUIRED_KW,
    SyntaxKind::OPTIONAL_KW,
    SyntaxKind::IDENT,
    SyntaxKind::MAP_KW,
    SyntaxKind::SET_KW,
    SyntaxKind::LIST_KW,
];

const FUNCTION_START: &[SyntaxKind] = &[
    SyntaxKind::ONEWAY_KW,
    SyntaxKind::IDENT,
    SyntaxKind::MAP_KW,
    SyntaxKind::SET_KW,
    SyntaxKind::LIST_KW,
];

const CONST_VALUE_START: &[SyntaxKind] = &[
    SyntaxKind::INTEGER,
    SyntaxKind::DOUBLE,
    SyntaxKind::STRING,
    SyntaxKind::TRUE_KW,
    SyntaxKind::FALSE_KW,
    SyntaxKind::IDENT,
    SyntaxKind::L_BRACKET,
    SyntaxKind::L_BRACE,
];

/// Deepest container type or constant value the parser descends into
const MAX_NESTING_DEPTH: usize = 128;

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    end: TextSize,
    depth: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>], end: TextSize) -> Self {
        Self {
            tokens,
            pos: 0,
            end,
            depth: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::ERROR)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        !self.at_eof() && kinds.contains(&self.current_kind())
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Look ahead, skipping trivia
    fn nth(&self, n: usize) -> SyntaxKind {
        self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(n)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::ERROR)
    }

    /// Look ahead without skipping trivia
    fn nth_raw(&self, n: usize) -> SyntaxKind {
        self.tokens
            .get(self.pos + n)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::ERROR)
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) {
        if let Some(token) = self.current() {
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume `kind` if it is the next non-trivia token, keeping any trivia
    /// in front of it. Leaves trivia untouched otherwise so the enclosing
    /// node does not swallow it.
    fn eat_next(&mut self, kind: SyntaxKind) -> bool {
        if self.nth(0) == kind {
            self.skip_trivia();
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> bool {
        self.skip_trivia();
        if self.eat(kind) {
            true
        } else {
            self.error(format!("expected {}", describe(kind)));
            false
        }
    }

    fn skip_trivia(&mut self) {
        while self.current().map(|t| t.kind.is_trivia()).unwrap_or(false) {
            self.bump();
        }
    }

    /// Optional `,` or `;` list separator
    fn eat_separator(&mut self) {
        if !self.eat_next(SyntaxKind::COMMA) {
            self.eat_next(SyntaxKind::SEMICOLON);
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&mut self, message: impl Into<String>) {
        let range = self
            .current()
            .map(|t| TextRange::at(t.offset, TextSize::of(t.text)))
            .unwrap_or_else(|| TextRange::empty(self.end));
        self.errors.push(SyntaxError::new(message, range));
    }

    fn error_recover(&mut self, message: impl Into<String>, recovery: &[SyntaxKind]) {
        self.error(message);
        self.builder.start_node(SyntaxKind::ERROR.into());
        // Always consume at least one token to make progress
        let mut consumed = false;
        while !self.at_eof() && !(consumed && self.at_any(recovery)) {
            // Identifiers stay findable inside unparsed source
            if self.at(SyntaxKind::IDENT) {
                self.parse_name();
            } else {
                self.bump();
            }
            consumed = true;
        }
        self.builder.finish_node();
    }

    /// Consume one over-deep nested construct without recursing: its head
    /// token and everything up to the matching close.
    fn skip_nested(&mut self, message: &str, open: &[SyntaxKind], close: &[SyntaxKind]) {
        self.error(message);
        self.builder.start_node(SyntaxKind::ERROR.into());
        let mut depth = 0usize;
        let mut head = true;
        while !self.at_eof() {
            let kind = self.current_kind();
            if open.contains(&kind) {
                depth += 1;
            } else if close.contains(&kind) {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            } else if depth == 0 && !head && !kind.is_trivia() {
                break;
            }
            head = false;
            if kind == SyntaxKind::IDENT {
                self.parse_name();
            } else {
                self.bump();
            }
            if depth == 0 && close.contains(&kind) {
                break;
            }
        }
        self.builder.finish_node();
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    /// Parse items until `close` (not consumed) or end of input.
    fn parse_items(
        &mut self,
        close: SyntaxKind,
        starts: &[SyntaxKind],
        what: &str,
        item: fn(&mut Self),
    ) {
        let mut recovery = starts.to_vec();
        recovery.push(close);

        loop {
            self.skip_trivia();
            if self.at_eof() || self.at(close) {
                break;
            }
            let pos_before = self.pos;
            if self.at_any(starts) {
                item(self);
            } else if self.at_any(&[SyntaxKind::COMMA, SyntaxKind::SEMICOLON]) {
                self.bump();
            } else {
                self.error_recover(format!("expected {what}"), &recovery);
            }
            // Safety: if we didn't make progress, force-skip a token
            if self.pos == pos_before && !self.at_eof() {
                self.error(format!("unexpected {}", describe(self.current_kind())));
                self.bump();
            }
        }
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// SourceFile = (Header | Definition)*
    fn parse_source_file(&mut self) {
        self.start_node(SyntaxKind::SOURCE_FILE);

        loop {
            self.skip_trivia();
            if self.at_eof() {
                break;
            }
            let pos_before = self.pos;
            self.parse_item();
            if self.pos == pos_before && !self.at_eof() {
                self.error(format!("unexpected {}", describe(self.current_kind())));
                self.bump();
            }
        }

        self.finish_node();
    }

    fn parse_item(&mut self) {
        match self.current_kind() {
            SyntaxKind::INCLUDE_KW => self.parse_include(SyntaxKind::INCLUDE),
            SyntaxKind::CPP_INCLUDE_KW => self.parse_include(SyntaxKind::CPP_INCLUDE),
            SyntaxKind::NAMESPACE_KW => self.parse_namespace(),
            SyntaxKind::CONST_KW => self.parse_const(),
            SyntaxKind::TYPEDEF_KW => self.parse_typedef(),
            SyntaxKind::ENUM_KW => self.parse_enum(),
            SyntaxKind::STRUCT_KW => self.parse_struct_like(SyntaxKind::STRUCT_DEF),
            SyntaxKind::UNION_KW => self.parse_struct_like(SyntaxKind::UNION_DEF),
            SyntaxKind::EXCEPTION_KW => self.parse_struct_like(SyntaxKind::EXCEPTION_DEF),
            SyntaxKind::SERVICE_KW => self.parse_service(),
            SyntaxKind::SCOPE_KW => self.parse_scope(),
            SyntaxKind::COMMA | SyntaxKind::SEMICOLON => self.bump(),
            _ => self.error_recover("expected definition", ITEM_START),
        }
    }

    /// Include = ('include' | 'cpp_include') STRING
    fn parse_include(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump();
        self.expect(SyntaxKind::STRING);
        self.finish_node();
    }

    /// Namespace = 'namespace' (Path | '*') Path
    ///
    /// Namespace scopes and values name target-language packages, not IDL
    /// symbols, so they stay plain tokens.
    fn parse_namespace(&mut self) {
        self.start_node(SyntaxKind::NAMESPACE);
        self.bump();
        self.skip_trivia();
        if !self.bump_path() {
            self.error("expected namespace scope");
        }
        self.skip_trivia();
        if !self.bump_path() {
            self.error("expected namespace");
        }
        self.finish_node();
    }

    /// Bump a run of identifier, keyword, `.` and `*` tokens with no trivia
    fn bump_path(&mut self) -> bool {
        let mut bumped = false;
        while !self.at_eof() {
            let kind = self.current_kind();
            if kind == SyntaxKind::IDENT
                || kind.is_keyword()
                || kind == SyntaxKind::DOT
                || kind == SyntaxKind::STAR
            {
                self.bump();
                bumped = true;
            } else {
                break;
            }
        }
        bumped
    }

    /// Const = 'const' FieldType Name '=' ConstValue ListSep?
    fn parse_const(&mut self) {
        self.start_node(SyntaxKind::CONST_DEF);
        self.bump();
        self.skip_trivia();
        self.parse_field_type();
        self.skip_trivia();
        self.parse_name();
        if self.expect(SyntaxKind::EQ) {
            self.skip_trivia();
            self.parse_const_value();
        }
        self.eat_separator();
        self.finish_node();
    }

    /// Typedef = 'typedef' FieldType Name Annotations? ListSep?
    fn parse_typedef(&mut self) {
        self.start_node(SyntaxKind::TYPEDEF_DEF);
        self.bump();
        self.skip_trivia();
        self.parse_field_type();
        self.skip_trivia();
        self.parse_name();
        self.parse_annotations();
        self.eat_separator();
        self.finish_node();
    }

    /// Enum = 'enum' Name '{' EnumValue* '}' Annotations?
    fn parse_enum(&mut self) {
        self.start_node(SyntaxKind::ENUM_DEF);
        self.bump();
        self.skip_trivia();
        self.parse_name();
        if self.expect(SyntaxKind::L_BRACE) {
            self.parse_items(
                SyntaxKind::R_BRACE,
                &[SyntaxKind::IDENT],
                "enum value",
                Self::parse_enum_value,
            );
            self.expect(SyntaxKind::R_BRACE);
        }
        self.parse_annotations();
        self.finish_node();
    }

    /// EnumValue = Name ('=' INTEGER)? Annotations? ListSep?
    fn parse_enum_value(&mut self) {
        self.start_node(SyntaxKind::ENUM_VALUE);
        self.parse_name();
        if self.eat_next(SyntaxKind::EQ) {
            self.expect(SyntaxKind::INTEGER);
        }
        self.parse_annotations();
        self.eat_separator();
        self.finish_node();
    }

    /// Struct = ('struct' | 'union' | 'exception') Name '{' Field* '}' Annotations?
    fn parse_struct_like(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump();
        self.skip_trivia();
        self.parse_name();
        self.skip_trivia();
        self.parse_field_list(SyntaxKind::L_BRACE, SyntaxKind::R_BRACE);
        self.parse_annotations();
        self.finish_node();
    }

    /// FieldList = open Field* close
    fn parse_field_list(&mut self, open: SyntaxKind, close: SyntaxKind) {
        self.start_node(SyntaxKind::FIELD_LIST);
        if self.expect(open) {
            self.parse_items(close, FIELD_START, "field", Self::parse_field);
            self.expect(close);
        }
        self.finish_node();
    }

    /// Field = FieldId? FieldReq? FieldType Name ('=' ConstValue)? Annotations? ListSep?
    fn parse_field(&mut self) {
        self.start_node(SyntaxKind::FIELD);

        if self.at(SyntaxKind::INTEGER) {
            self.start_node(SyntaxKind::FIELD_ID);
            self.bump();
            self.expect(SyntaxKind::COLON);
            self.finish_node();
            self.skip_trivia();
        }

        if self.at_any(&[SyntaxKind::REQUIRED_KW, SyntaxKind::OPTIONAL_KW]) {
            self.start_node(SyntaxKind::FIELD_REQ);
            self.bump();
            self.finish_node();
            self.skip_trivia();
        }

        self.parse_field_type();
        self.skip_trivia();
        self.parse_name();

        if self.eat_next(SyntaxKind::EQ) {
            self.skip_trivia();
            self.parse_const_value();
        }

        self.parse_annotations();
        self.eat_separator();
        self.finish_node();
    }

    /// FieldType = Name | MapType | SetType | ListType
    fn parse_field_type(&mut self) {
        self.start_node(SyntaxKind::FIELD_TYPE);
        if self.depth >= MAX_NESTING_DEPTH {
            self.skip_nested("type nested too deeply", &[SyntaxKind::LT], &[SyntaxKind::GT]);
            self.finish_node();
            return;
        }
        self.depth += 1;
        match self.current_kind() {
            SyntaxKind::MAP_KW => {
                self.start_node(SyntaxKind::MAP_TYPE);
                self.bump();
                if self.expect(SyntaxKind::LT) {
                    self.skip_trivia();
                    self.parse_field_type();
                    if self.expect(SyntaxKind::COMMA) {
                        self.skip_trivia();
                        self.parse_field_type();
                    }
                    self.expect(SyntaxKind::GT);
                }
                self.finish_node();
            }
            SyntaxKind::SET_KW | SyntaxKind::LIST_KW => {
                let kind = if self.at(SyntaxKind::SET_KW) {
                    SyntaxKind::SET_TYPE
                } else {
                    SyntaxKind::LIST_TYPE
                };
                self.start_node(kind);
                self.bump();
                if self.expect(SyntaxKind::LT) {
                    self.skip_trivia();
                    self.parse_field_type();
                    self.expect(SyntaxKind::GT);
                }
                self.finish_node();
            }
            SyntaxKind::IDENT => self.parse_name(),
            _ => self.error("expected type"),
        }
        self.depth -= 1;
        self.finish_node();
    }

    /// Name = IDENT ('.' IDENT)*
    fn parse_name(&mut self) {
        if !self.at(SyntaxKind::IDENT) {
            self.error("expected identifier");
            return;
        }
        self.start_node(SyntaxKind::NAME);
        self.bump();
        while self.at(SyntaxKind::DOT) && self.nth_raw(1) == SyntaxKind::IDENT {
            self.bump();
            self.bump();
        }
        self.finish_node();
    }

    /// Service = 'service' Name ('extends' Name)? '{' Function* '}' Annotations?
    fn parse_service(&mut self) {
        self.start_node(SyntaxKind::SERVICE_DEF);
        self.bump();
        self.skip_trivia();
        self.parse_name();

        if self.nth(0) == SyntaxKind::EXTENDS_KW {
            self.skip_trivia();
            self.start_node(SyntaxKind::EXTENDS_CLAUSE);
            self.bump();
            self.skip_trivia();
            self.parse_name();
            self.finish_node();
        }

        if self.expect(SyntaxKind::L_BRACE) {
            self.parse_items(
                SyntaxKind::R_BRACE,
                FUNCTION_START,
                "function",
                Self::parse_function,
            );
            self.expect(SyntaxKind::R_BRACE);
        }
        self.parse_annotations();
        self.finish_node();
    }

    /// Function = 'oneway'? FunctionType Name '(' Field* ')' ('throws' '(' Field* ')')?
    ///            Annotations? ListSep?
    ///
    /// The parameter list and the throws list are both FIELD_LIST children;
    /// the throws list is the one after the THROWS_KW token.
    fn parse_function(&mut self) {
        self.start_node(SyntaxKind::FUNCTION_DEF);

        if self.eat(SyntaxKind::ONEWAY_KW) {
            self.skip_trivia();
        }

        self.start_node(SyntaxKind::FUNCTION_TYPE);
        self.parse_field_type();
        self.finish_node();

        self.skip_trivia();
        self.parse_name();
        self.skip_trivia();
        self.parse_field_list(SyntaxKind::L_PAREN, SyntaxKind::R_PAREN);

        if self.eat_next(SyntaxKind::THROWS_KW) {
            self.skip_trivia();
            self.parse_field_list(SyntaxKind::L_PAREN, SyntaxKind::R_PAREN);
        }

        self.parse_annotations();
        self.eat_separator();
        self.finish_node();
    }

    /// Scope = 'scope' Name ('prefix' STRING)? '{' Operation* '}' Annotations?
    fn parse_scope(&mut self) {
        self.start_node(SyntaxKind::SCOPE_DEF);
        self.bump();
        self.skip_trivia();
        self.parse_name();

        if self.nth(0) == SyntaxKind::PREFIX_KW {
            self.skip_trivia();
            self.start_node(SyntaxKind::SCOPE_PREFIX);
            self.bump();
            self.expect(SyntaxKind::STRING);
            self.finish_node();
        }

        if self.expect(SyntaxKind::L_BRACE) {
            self.parse_items(
                SyntaxKind::R_BRACE,
                &[SyntaxKind::IDENT],
                "operation",
                Self::parse_operation,
            );
            self.expect(SyntaxKind::R_BRACE);
        }
        self.parse_annotations();
        self.finish_node();
    }

    /// Operation = Name ':' FieldType Annotations? ListSep?
    fn parse_operation(&mut self) {
        self.start_node(SyntaxKind::OPERATION);
        self.parse_name();
        if self.expect(SyntaxKind::COLON) {
            self.skip_trivia();
            self.parse_field_type();
        }
        self.parse_annotations();
        self.eat_separator();
        self.finish_node();
    }

    /// ConstValue = INTEGER | DOUBLE | STRING | 'true' | 'false' | Name | ConstList | ConstMap
    fn parse_const_value(&mut self) {
        self.start_node(SyntaxKind::CONST_VALUE);
        if self.depth >= MAX_NESTING_DEPTH {
            self.skip_nested(
                "value nested too deeply",
                &[SyntaxKind::L_BRACKET, SyntaxKind::L_BRACE],
                &[SyntaxKind::R_BRACKET, SyntaxKind::R_BRACE],
            );
            self.finish_node();
            return;
        }
        self.depth += 1;
        match self.current_kind() {
            SyntaxKind::INTEGER
            | SyntaxKind::DOUBLE
            | SyntaxKind::STRING
            | SyntaxKind::TRUE_KW
            | SyntaxKind::FALSE_KW => self.bump(),
            SyntaxKind::IDENT => self.parse_name(),
            SyntaxKind::L_BRACKET => {
                self.start_node(SyntaxKind::CONST_LIST);
                self.bump();
                self.parse_items(
                    SyntaxKind::R_BRACKET,
                    CONST_VALUE_START,
                    "value",
                    Self::parse_const_value,
                );
                self.expect(SyntaxKind::R_BRACKET);
                self.finish_node();
            }
            SyntaxKind::L_BRACE => {
                self.start_node(SyntaxKind::CONST_MAP);
                self.bump();
                self.parse_items(
                    SyntaxKind::R_BRACE,
                    CONST_VALUE_START,
                    "map entry",
                    Self::parse_const_map_entry,
                );
                self.expect(SyntaxKind::R_BRACE);
                self.finish_node();
            }
            _ => self.error("expected value"),
        }
        self.depth -= 1;
        self.finish_node();
    }

    /// ConstMapEntry = ConstValue ':' ConstValue
    fn parse_const_map_entry(&mut self) {
        self.start_node(SyntaxKind::CONST_MAP_ENTRY);
        self.parse_const_value();
        if self.expect(SyntaxKind::COLON) {
            self.skip_trivia();
            self.parse_const_value();
        }
        self.finish_node();
    }

    /// Annotations = '(' (Path ('=' STRING)? ListSep?)* ')'
    fn parse_annotations(&mut self) {
        if self.nth(0) != SyntaxKind::L_PAREN {
            return;
        }
        self.skip_trivia();
        self.start_node(SyntaxKind::ANNOTATIONS);
        self.bump();
        self.parse_items(
            SyntaxKind::R_PAREN,
            &[SyntaxKind::IDENT],
            "annotation",
            Self::parse_annotation,
        );
        self.expect(SyntaxKind::R_PAREN);
        self.finish_node();
    }

    /// Annotation keys are target-language hints, not IDL symbols
    fn parse_annotation(&mut self) {
        self.start_node(SyntaxKind::ANNOTATION);
        self.bump_path();
        if self.eat_next(SyntaxKind::EQ) {
            self.expect(SyntaxKind::STRING);
        }
        self.finish_node();
    }
}

/// Human-readable name of a token kind for error messages
fn describe(kind: SyntaxKind) -> &'static str {
    match kind {
        SyntaxKind::L_BRACE => "'{'",
        SyntaxKind::R_BRACE => "'}'",
        SyntaxKind::L_BRACKET => "'['",
        SyntaxKind::R_BRACKET => "']'",
        SyntaxKind::L_PAREN => "'('",
        SyntaxKind::R_PAREN => "')'",
        SyntaxKind::LT => "'<'",
        SyntaxKind::GT => "'>'",
        SyntaxKind::COMMA => "','",
        SyntaxKind::SEMICOLON => "';'",
        SyntaxKind::COLON => "':'",
        SyntaxKind::EQ => "'='",
        SyntaxKind::DOT => "'.'",
        SyntaxKind::STAR => "'*'",
        SyntaxKind::IDENT => "identifier",
        SyntaxKind::INTEGER => "integer",
        SyntaxKind::DOUBLE => "number",
        SyntaxKind::STRING => "string literal",
        kind if kind.is_keyword() => "keyword",
        _ => "token",
    }
}
