/// Top-level declarations and their bodies.
///
/// This chunk parses:
/// - the `jass` entry rule (the top-level loop)
/// - `type`, `native`, `function` and `globals` declarations
/// - variable declarations and typed names
impl<'a> Parser<'a> {
    // ========================================================================
    // Entry rule
    // ========================================================================

    /// `jass := (linebreak | type_declare | globals_declare | jass_constant)* EOF`
    fn jass(&mut self) -> CstNode {
        let mut root = CstNode::new(Rule::Jass);
        while let Some(kind) = self.peek_kind() {
            match kind {
                TokenId::Linebreak => self.bump(&mut root, TokenId::Linebreak),
                TokenId::Type => {
                    let node = self.type_declare();
                    root.push_node(node);
                }
                TokenId::Globals => {
                    let node = self.globals_declare();
                    root.push_node(node);
                }
                TokenId::Constant | TokenId::Native | TokenId::Function => {
                    let node = self.jass_constant();
                    root.push_node(node);
                }
                _ => self.resync_line(
                    SyntaxErrorKind::NotAllInputParsed,
                    "'type', 'globals', 'native' or 'function'",
                ),
            }
        }
        root
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    /// `jass_constant := [constant] (function_declare | native_declare)`
    fn jass_constant(&mut self) -> CstNode {
        let mut node = CstNode::new(Rule::JassConstant);
        if self.at(TokenId::Constant) {
            self.bump(&mut node, TokenId::Constant);
        }
        match self.peek_kind() {
            Some(TokenId::Function) => {
                let function = self.function_declare();
                node.push_node(function);
            }
            Some(TokenId::Native) => {
                let native = self.native_declare();
                node.push_node(native);
            }
            _ => {
                // The top-level loop resyncs on this same token; the error is recorded once.
                let found = self.offending();
                let described = found.describe();
                let message = messages::render(
                    MessageId::NoViableAlt,
                    &[("expected", "'function' or 'native'"), ("found", described.as_str())],
                );
                self.report(SyntaxErrorKind::NoViableAlt, message, found);
            }
        }
        node
    }

    /// `type_declare := type identifier extends identifier`
    fn type_declare(&mut self) -> CstNode {
        let mut node = CstNode::new(Rule::TypeDeclare);
        self.bump(&mut node, TokenId::Type);
        self.consume(&mut node, TokenId::Identifier, TokenId::Identifier);
        self.consume(&mut node, TokenId::Extends, TokenId::Extends);
        self.consume(&mut node, TokenId::Identifier, TokenId::Identifier);
        node
    }

    /// `native_declare := native function_head`
    fn native_declare(&mut self) -> CstNode {
        let mut node = CstNode::new(Rule::NativeDeclare);
        self.bump(&mut node, TokenId::Native);
        let head = self.function_head();
        node.push_node(head);
        node
    }

    /// `function_declare := function function_head linebreak (variable_declare | statement | linebreak)* endfunction`
    ///
    /// Local declarations are accepted anywhere in the body; ordering is not a syntax concern.
    fn function_declare(&mut self) -> CstNode {
        let mut node = CstNode::new(Rule::FunctionDeclare);
        self.bump(&mut node, TokenId::Function);
        let head = self.function_head();
        node.push_node(head);
        self.consume(&mut node, TokenId::Linebreak, TokenId::Linebreak);

        while let Some(kind) = self.peek_kind() {
            match kind {
                TokenId::Endfunction => break,
                TokenId::Linebreak => self.bump(&mut node, TokenId::Linebreak),
                _ if self.at_declaration_start() => break,
                TokenId::Constant | TokenId::Local | TokenId::Identifier => {
                    let variable = self.variable_declare();
                    node.push_node(variable);
                }
                _ if is_statement_start(kind) => {
                    let statement = self.statement();
                    node.push_node(statement);
                }
                TokenId::Endglobals => break,
                _ => self.resync_line(SyntaxErrorKind::NoViableAlt, "a statement or local declaration"),
            }
        }

        self.consume(&mut node, TokenId::Endfunction, TokenId::Endfunction);
        node
    }

    /// `function_head := identifier takes (nothing | typedname (, typedname)*) returns (nothing | identifier)`
    fn function_head(&mut self) -> CstNode {
        let mut node = CstNode::new(Rule::FunctionHead);
        self.consume(&mut node, Label::IdentifierName, TokenId::Identifier);
        self.consume(&mut node, TokenId::Takes, TokenId::Takes);

        match self.peek_kind() {
            Some(TokenId::Nothing) => self.bump(&mut node, Label::TakesNothing),
            Some(TokenId::Identifier) => {
                let first = self.typedname();
                node.push_node(first);
                while self.at(TokenId::Comma) {
                    self.bump(&mut node, TokenId::Comma);
                    let next = self.typedname();
                    node.push_node(next);
                }
            }
            _ => {
                let found = self.offending();
                let described = found.describe();
                let message = messages::render(
                    MessageId::EarlyExit,
                    &[("expected", "parameter or 'nothing'"), ("found", described.as_str())],
                );
                self.report(SyntaxErrorKind::EarlyExit, message, found);
                self.insert_placeholder(&mut node, Label::TakesNothing, TokenId::Nothing);
            }
        }

        self.consume(&mut node, TokenId::Returns, TokenId::Returns);
        if self.at(TokenId::Nothing) {
            self.bump(&mut node, Label::ReturnsNothing);
        } else {
            self.consume(&mut node, Label::IdentifierReturns, TokenId::Identifier);
        }
        node
    }

    /// `globals_declare := globals (variable_declare | linebreak)* endglobals`
    fn globals_declare(&mut self) -> CstNode {
        let mut node = CstNode::new(Rule::GlobalsDeclare);
        self.bump(&mut node, TokenId::Globals);

        while let Some(kind) = self.peek_kind() {
            match kind {
                TokenId::Endglobals => break,
                TokenId::Linebreak => self.bump(&mut node, TokenId::Linebreak),
                _ if self.at_declaration_start() => break,
                TokenId::Constant | TokenId::Local | TokenId::Identifier => {
                    let variable = self.variable_declare();
                    node.push_node(variable);
                }
                TokenId::Endfunction => break,
                _ => self.resync_line(SyntaxErrorKind::NoViableAlt, "a global variable declaration"),
            }
        }

        self.consume(&mut node, TokenId::Endglobals, TokenId::Endglobals);
        node
    }

    /// `variable_declare := [constant | local] typedname [= expression]`
    fn variable_declare(&mut self) -> CstNode {
        let mut node = CstNode::new(Rule::VariableDeclare);
        if let Some(kind @ (TokenId::Constant | TokenId::Local)) = self.peek_kind() {
            self.bump(&mut node, kind);
        }
        let typedname = self.typedname();
        node.push_node(typedname);
        if self.at(TokenId::Assign) {
            self.bump(&mut node, TokenId::Assign);
            let value = self.expression();
            node.push_node(value);
        }
        node
    }

    /// `typedname := identifier [array] identifier`
    fn typedname(&mut self) -> CstNode {
        let mut node = CstNode::new(Rule::Typedname);
        self.consume(&mut node, TokenId::Identifier, TokenId::Identifier);
        if self.at(TokenId::Array) {
            self.bump(&mut node, TokenId::Array);
        }
        self.consume(&mut node, TokenId::Identifier, TokenId::Identifier);
        node
    }
}
