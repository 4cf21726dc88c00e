/// Expression parsing.
///
/// Precedence climbs through three flat levels, each storing its operators as siblings of its operands:
/// - `expression`: comparisons and `and`/`or`
/// - `addition`: `+` and `-`
/// - `multiplication`: `*` and `/`
///
/// `primary` covers literals, code references, unary `-`/`not`, parenthesized expressions, calls and
/// (optionally indexed) names.

/// Operators joining `addition`s inside an `expression`.
const EXPRESSION_OPERATORS: &[TokenId] = &[
    TokenId::Equals,
    TokenId::Notequals,
    TokenId::Lessorequal,
    TokenId::Less,
    TokenId::Great,
    TokenId::Greatorequal,
    TokenId::And,
    TokenId::Or,
];

const ADDITION_OPERATORS: &[TokenId] = &[TokenId::Add, TokenId::Sub];

const MULTIPLICATION_OPERATORS: &[TokenId] = &[TokenId::Mult, TokenId::Div];

impl<'a> Parser<'a> {
    /// Return `true` if the current token can start an expression.
    fn at_expression_start(&self) -> bool {
        self.at_any(&[
            TokenId::Stringliteral,
            TokenId::Integer,
            TokenId::Real,
            TokenId::Idliteral,
            TokenId::Function,
            TokenId::Sub,
            TokenId::Not,
            TokenId::Lparen,
            TokenId::Identifier,
        ])
    }

    /// Enter one level of statement or expression nesting, or report that the limit is reached.
    fn enter_nested(&mut self) -> bool {
        if self.depth < MAX_NESTING {
            self.depth += 1;
            return true;
        }
        let found = self.offending();
        let limit = MAX_NESTING.to_string();
        let message = messages::render(MessageId::NestingTooDeep, &[("limit", limit.as_str())]);
        self.report(SyntaxErrorKind::NoViableAlt, message, found);
        false
    }

    /// `expression := addition ((== | != | <= | < | > | >= | and | or) addition)*`
    fn expression(&mut self) -> CstNode {
        let mut node = CstNode::new(Rule::Expression);
        if !self.enter_nested() {
            self.insert_placeholder(&mut node, TokenId::Identifier, TokenId::Identifier);
            return node;
        }

        let first = self.addition();
        node.push_node(first);
        while let Some(op) = self.peek_kind().filter(|k| EXPRESSION_OPERATORS.contains(k)) {
            self.bump(&mut node, op);
            let next = self.addition();
            node.push_node(next);
        }

        self.depth -= 1;
        node
    }

    /// `addition := multiplication ((+ | -) multiplication)*`
    fn addition(&mut self) -> CstNode {
        let mut node = CstNode::new(Rule::Addition);
        let first = self.multiplication();
        node.push_node(first);
        while let Some(op) = self.peek_kind().filter(|k| ADDITION_OPERATORS.contains(k)) {
            self.bump(&mut node, op);
            let next = self.multiplication();
            node.push_node(next);
        }
        node
    }

    /// `multiplication := primary ((* | /) primary)*`
    fn multiplication(&mut self) -> CstNode {
        let mut node = CstNode::new(Rule::Multiplication);
        let first = self.primary();
        node.push_node(first);
        while let Some(op) = self.peek_kind().filter(|k| MULTIPLICATION_OPERATORS.contains(k)) {
            self.bump(&mut node, op);
            let next = self.primary();
            node.push_node(next);
        }
        node
    }

    /// `primary := literal | function identifier | - primary | not primary | ( expression ) | function_call |
    /// identifier [arrayaccess]`
    ///
    /// When no alternative applies, a placeholder `identifier` stands in for the operand.
    fn primary(&mut self) -> CstNode {
        let mut node = CstNode::new(Rule::Primary);
        match self.peek_kind() {
            Some(kind @ (TokenId::Stringliteral | TokenId::Integer | TokenId::Real | TokenId::Idliteral)) => {
                self.bump(&mut node, kind);
            }
            Some(TokenId::Function) => {
                self.bump(&mut node, TokenId::Function);
                self.consume(&mut node, TokenId::Identifier, TokenId::Identifier);
            }
            Some(kind @ (TokenId::Sub | TokenId::Not)) => {
                self.bump(&mut node, kind);
                if self.enter_nested() {
                    let operand = self.primary();
                    node.push_node(operand);
                    self.depth -= 1;
                } else {
                    self.insert_placeholder(&mut node, TokenId::Identifier, TokenId::Identifier);
                }
            }
            Some(TokenId::Lparen) => {
                self.bump(&mut node, TokenId::Lparen);
                let inner = self.expression();
                node.push_node(inner);
                self.consume(&mut node, TokenId::Rparen, TokenId::Rparen);
            }
            Some(TokenId::Identifier) if self.peek_nth_kind(1) == Some(TokenId::Lparen) => {
                let call = self.function_call();
                node.push_node(call);
            }
            Some(TokenId::Identifier) => {
                self.bump(&mut node, TokenId::Identifier);
                if self.at(TokenId::Lsquareparen) {
                    let index = self.arrayaccess();
                    node.push_node(index);
                }
            }
            _ => {
                let found = self.offending();
                let described = found.describe();
                let message = messages::render(
                    MessageId::NoViableAlt,
                    &[("expected", "an expression"), ("found", described.as_str())],
                );
                self.report(SyntaxErrorKind::NoViableAlt, message, found);
                self.insert_placeholder(&mut node, TokenId::Identifier, TokenId::Identifier);
            }
        }
        node
    }

    /// `function_call := identifier ( [expression (, expression)*] )`
    fn function_call(&mut self) -> CstNode {
        let mut node = CstNode::new(Rule::FunctionCall);
        self.consume(&mut node, TokenId::Identifier, TokenId::Identifier);
        self.consume(&mut node, TokenId::Lparen, TokenId::Lparen);
        if self.at_expression_start() {
            let first = self.expression();
            node.push_node(first);
            while self.at(TokenId::Comma) {
                self.bump(&mut node, TokenId::Comma);
                let next = self.expression();
                node.push_node(next);
            }
        }
        self.consume(&mut node, TokenId::Rparen, TokenId::Rparen);
        node
    }

    /// `arrayaccess := [ expression ]`
    fn arrayaccess(&mut self) -> CstNode {
        let mut node = CstNode::new(Rule::Arrayaccess);
        self.bump(&mut node, TokenId::Lsquareparen);
        let index = self.expression();
        node.push_node(index);
        self.consume(&mut node, TokenId::Rsquareparen, TokenId::Rsquareparen);
        node
    }
}
