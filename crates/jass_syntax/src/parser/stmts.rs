/// Statement parsing.
///
/// Statements only appear inside function bodies and nested blocks. Each statement rule starts with a distinct
/// keyword, so dispatch is a single-token lookahead.

/// Return `true` if `kind` can start a `statement`.
fn is_statement_start(kind: TokenId) -> bool {
    matches!(
        kind,
        TokenId::If | TokenId::Set | TokenId::Call | TokenId::Debug | TokenId::Loop | TokenId::Exitwhen | TokenId::Return
    )
}

impl<'a> Parser<'a> {
    /// `statement := if_statement | set_statement | call_statement | loop_statement | exitwhen_statement |
    /// return_statement`
    ///
    /// Nested blocks count toward the same depth limit as expressions. Past the limit the line is reported and
    /// skipped instead of parsed.
    fn statement(&mut self) -> CstNode {
        let mut node = CstNode::new(Rule::Statement);
        if !self.enter_nested() {
            self.resync_line(SyntaxErrorKind::NoViableAlt, "a statement");
            return node;
        }

        let inner = match self.peek_kind() {
            Some(TokenId::If) => Some(self.if_statement()),
            Some(TokenId::Set) => Some(self.set_statement()),
            Some(TokenId::Call | TokenId::Debug) => Some(self.call_statement()),
            Some(TokenId::Loop) => Some(self.loop_statement()),
            Some(TokenId::Exitwhen) => Some(self.exitwhen_statement()),
            Some(TokenId::Return) => Some(self.return_statement()),
            _ => None,
        };
        self.depth -= 1;

        if let Some(inner) = inner {
            node.push_node(inner);
        }
        node
    }

    /// `(statement | linebreak)*` inside `if`/`elseif`/`else`/`loop`.
    fn statement_block(&mut self, node: &mut CstNode) {
        while let Some(kind) = self.peek_kind() {
            match kind {
                TokenId::Linebreak => self.bump(node, TokenId::Linebreak),
                _ if is_statement_start(kind) => {
                    let statement = self.statement();
                    node.push_node(statement);
                }
                _ if BLOCK_TERMINATORS.contains(&kind) || self.at_declaration_start() => break,
                _ => self.resync_line(SyntaxErrorKind::NoViableAlt, "a statement"),
            }
        }
    }

    /// `set_statement := set identifier [arrayaccess] = expression`
    fn set_statement(&mut self) -> CstNode {
        let mut node = CstNode::new(Rule::SetStatement);
        self.bump(&mut node, TokenId::Set);
        self.consume(&mut node, TokenId::Identifier, TokenId::Identifier);
        if self.at(TokenId::Lsquareparen) {
            let index = self.arrayaccess();
            node.push_node(index);
        }
        self.consume(&mut node, TokenId::Assign, TokenId::Assign);
        let value = self.expression();
        node.push_node(value);
        node
    }

    /// `call_statement := [debug] call function_call`
    fn call_statement(&mut self) -> CstNode {
        let mut node = CstNode::new(Rule::CallStatement);
        if self.at(TokenId::Debug) {
            self.bump(&mut node, TokenId::Debug);
        }
        self.consume(&mut node, TokenId::Call, TokenId::Call);
        let call = self.function_call();
        node.push_node(call);
        node
    }

    /// `loop_statement := loop (statement | linebreak)* endloop`
    fn loop_statement(&mut self) -> CstNode {
        let mut node = CstNode::new(Rule::LoopStatement);
        self.bump(&mut node, TokenId::Loop);
        self.statement_block(&mut node);
        self.consume(&mut node, TokenId::Endloop, TokenId::Endloop);
        node
    }

    /// `exitwhen_statement := exitwhen expression`
    fn exitwhen_statement(&mut self) -> CstNode {
        let mut node = CstNode::new(Rule::ExitwhenStatement);
        self.bump(&mut node, TokenId::Exitwhen);
        let condition = self.expression();
        node.push_node(condition);
        node
    }

    /// `return_statement := return [expression]`
    fn return_statement(&mut self) -> CstNode {
        let mut node = CstNode::new(Rule::ReturnStatement);
        self.bump(&mut node, TokenId::Return);
        if self.at_expression_start() {
            let value = self.expression();
            node.push_node(value);
        }
        node
    }

    /// `if_statement := if expression then (statement | linebreak)* elseif_statement* [else_statement] endif`
    fn if_statement(&mut self) -> CstNode {
        let mut node = CstNode::new(Rule::IfStatement);
        self.bump(&mut node, TokenId::If);
        let condition = self.expression();
        node.push_node(condition);
        self.consume(&mut node, TokenId::Then, TokenId::Then);
        self.statement_block(&mut node);

        while self.at(TokenId::Elseif) {
            let branch = self.elseif_statement();
            node.push_node(branch);
        }
        if self.at(TokenId::Else) {
            let branch = self.else_statement();
            node.push_node(branch);
        }

        self.consume(&mut node, TokenId::Endif, TokenId::Endif);
        node
    }

    /// `elseif_statement := elseif expression then (statement | linebreak)*`
    fn elseif_statement(&mut self) -> CstNode {
        let mut node = CstNode::new(Rule::ElseifStatement);
        self.bump(&mut node, TokenId::Elseif);
        let condition = self.expression();
        node.push_node(condition);
        self.consume(&mut node, TokenId::Then, TokenId::Then);
        self.statement_block(&mut node);
        node
    }

    /// `else_statement := else (statement | linebreak)*`
    fn else_statement(&mut self) -> CstNode {
        let mut node = CstNode::new(Rule::ElseStatement);
        self.bump(&mut node, TokenId::Else);
        self.statement_block(&mut node);
        node
    }
}
