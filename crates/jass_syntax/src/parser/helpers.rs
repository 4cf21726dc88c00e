/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `bump`, `consume`)
/// - Lookahead predicates shared by several rules
/// - Error recording and recovery (`report`, `resync_line`)
///
/// Recovery follows three strategies, tried in this order by `consume`:
/// 1. single-token deletion: the expected token is right behind a stray one, so the stray one is dropped;
/// 2. single-token insertion: a zero-width placeholder of the expected kind is added to the tree;
/// 3. line resynchronisation (block loops only): the rest of an unusable line is skipped.
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return the current token without consuming it. Always `None` once the parser halted.
    fn peek(&self) -> Option<&'a Token> {
        if self.halted {
            return None;
        }
        self.tokens.get(self.pos).copied()
    }

    fn peek_kind(&self) -> Option<TokenId> {
        self.peek().map(|t| t.kind)
    }

    /// Kind of the token `n` positions after the current one.
    fn peek_nth_kind(&self, n: usize) -> Option<TokenId> {
        if self.halted {
            return None;
        }
        self.tokens.get(self.pos + n).map(|t| t.kind)
    }

    /// Return `true` if the current token is of kind `kind`.
    fn at(&self, kind: TokenId) -> bool {
        self.peek_kind() == Some(kind)
    }

    fn at_any(&self, kinds: &[TokenId]) -> bool {
        self.peek_kind().is_some_and(|k| kinds.contains(&k))
    }

    /// Return `true` if the current token starts a top-level declaration.
    ///
    /// Block loops stop here so that a missing `endfunction`/`endglobals` costs one error, not the rest of the
    /// file.
    fn at_declaration_start(&self) -> bool {
        match self.peek_kind() {
            Some(TokenId::Type | TokenId::Globals | TokenId::Native | TokenId::Function) => true,
            Some(TokenId::Constant) => matches!(self.peek_nth_kind(1), Some(TokenId::Function | TokenId::Native)),
            _ => false,
        }
    }

    /// Consume the current token unconditionally, storing it under `key`.
    fn bump(&mut self, node: &mut CstNode, key: impl Into<Key>) {
        if let Some(token) = self.peek() {
            node.push_token(key, token.clone());
            self.pos += 1;
        }
    }

    /// Skip the current token without storing it.
    fn skip(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Consume a token of kind `kind` under `key`, recovering if it is missing.
    ///
    /// ## Returns
    /// - `true` if a real token was stored (directly or after deleting one stray token), `false` if a placeholder
    ///   was inserted or the parser is halted.
    fn consume(&mut self, node: &mut CstNode, key: impl Into<Key>, kind: TokenId) -> bool {
        if self.halted {
            return false;
        }
        if self.at(kind) {
            self.bump(node, key);
            return true;
        }

        let found = self.offending();
        let expected = describe_expected(kind);
        let described = found.describe();
        let message = messages::render(
            MessageId::MismatchToken,
            &[("expected", expected.as_str()), ("found", described.as_str())],
        );
        self.report(SyntaxErrorKind::MismatchToken, message, found);
        if self.halted {
            return false;
        }

        // Line breaks are never deleted: they carry the line structure the block loops resync on.
        if self.peek_kind().is_some_and(|k| k != TokenId::Linebreak) && self.peek_nth_kind(1) == Some(kind) {
            tracing::trace!(expected = ?kind, "recovered by single-token deletion");
            self.skip();
            self.bump(node, key);
            return true;
        }

        tracing::trace!(expected = ?kind, "recovered by single-token insertion");
        self.insert_placeholder(node, key, kind);
        false
    }

    /// Add a zero-width placeholder of `kind` right before the current token.
    fn insert_placeholder(&mut self, node: &mut CstNode, key: impl Into<Key>, kind: TokenId) {
        if self.halted {
            return;
        }
        let placeholder = match self.peek() {
            Some(token) => Token::placeholder(kind, token),
            None => Token::placeholder_at(kind, self.eof_offset, self.eof_position),
        };
        node.push_token(key, placeholder);
    }

    /// The token an error at the current position is recorded against.
    ///
    /// At end of input this is a zero-width marker after the last token.
    fn offending(&self) -> Token {
        match self.tokens.get(self.pos) {
            Some(token) => (*token).clone(),
            None => Token::placeholder_at(TokenId::Linebreak, self.eof_offset, self.eof_position),
        }
    }

    /// Record an error unless one was already recorded at the same offset.
    fn report(&mut self, kind: SyntaxErrorKind, message: String, token: Token) {
        if self.halted {
            return;
        }
        if self.reported.insert(token.span.start) {
            tracing::debug!(kind = %kind, offset = token.span.start, "{message}");
            self.errors.push(SyntaxError::new(kind, message, token));
        }
        if !self.config.recovery_enabled || self.errors.len() >= self.config.max_errors {
            self.halted = true;
        }
    }

    /// Report the current token and skip to the end of its line.
    ///
    /// Always skips at least one token; stops before the next line break or block terminator so the enclosing
    /// loop can see it.
    fn resync_line(&mut self, kind: SyntaxErrorKind, expected: &str) {
        let found = self.offending();
        let described = found.describe();
        let message = messages::render(kind.message_id(), &[("expected", expected), ("found", described.as_str())]);
        self.report(kind, message, found);

        self.skip();
        while let Some(next) = self.peek_kind() {
            if next == TokenId::Linebreak || BLOCK_TERMINATORS.contains(&next) {
                break;
            }
            self.skip();
        }
    }
}

/// Keywords that close a block; line resynchronisation never skips past them.
const BLOCK_TERMINATORS: &[TokenId] = &[
    TokenId::Endfunction,
    TokenId::Endglobals,
    TokenId::Endif,
    TokenId::Elseif,
    TokenId::Else,
    TokenId::Endloop,
];
