/// Parse a token stream into a `jass` root node with the default [`ParserConfig`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `jass_syntax::lexer`. Trivia tokens are ignored.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> ParseResult {
    parse_with_config(tokens, ParserConfig::default())
}

/// Parse a token stream with an explicit configuration.
#[tracing::instrument(skip_all, fields(token_count = tokens.len(), recovery = config.recovery_enabled))]
pub fn parse_with_config(tokens: &[Token], config: ParserConfig) -> ParseResult {
    let result = Parser::new(tokens).with_config(config).parse();
    tracing::debug!(errors = result.errors.len(), "parsed");
    result
}
