//! LSP backend implementation for JASS

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use super::diagnostics::{LineIndex, to_lsp_diagnostic};
use super::features;
use crate::config::Config;
use crate::pipeline::{self, DocumentAnalysis};

/// JASS Language Server
pub struct JassLanguageServer {
    client: Client,
    /// Cached document state
    documents: Arc<RwLock<HashMap<Url, DocumentState>>>,
    config: Arc<RwLock<Config>>,
}

/// State for an open document
struct DocumentState {
    /// Latest version received from the client
    version: i32,
    /// Latest source received from the client
    source: Arc<str>,
    /// Last completed analysis
    analysis: Option<Snapshot>,
}

impl DocumentState {
    /// The cached analysis, if it matches the latest version.
    fn fresh(&self) -> Option<Snapshot> {
        self.analysis.as_ref().filter(|s| s.version == self.version).cloned()
    }
}

/// A completed analysis with the version and text it was computed from.
///
/// Positions sent to the client are converted against `source`, never against a newer text.
#[derive(Clone)]
struct Snapshot {
    version: i32,
    source: Arc<str>,
    doc: Arc<DocumentAnalysis>,
}

impl Snapshot {
    fn lines(&self) -> LineIndex<'_> {
        LineIndex::new(&self.source)
    }
}

impl JassLanguageServer {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: Arc::new(RwLock::new(HashMap::new())),
            config: Arc::new(RwLock::new(Config::default())),
        }
    }

    /// Record a new document version, analyze it and publish its diagnostics.
    async fn analyze_document(&self, uri: &Url, source: String, version: i32) {
        {
            let mut docs = self.documents.write().await;
            let state = docs.entry(uri.clone()).or_insert_with(|| DocumentState {
                version,
                source: Arc::from(""),
                analysis: None,
            });
            state.version = version;
            state.source = Arc::from(source);
        }

        let Some(snapshot) = self.current_analysis(uri).await else {
            return;
        };
        let lines = snapshot.lines();
        let diagnostics: Vec<Diagnostic> = snapshot
            .doc
            .diagnostics()
            .iter()
            .map(|d| to_lsp_diagnostic(d, uri, &lines))
            .collect();
        self.client
            .publish_diagnostics(uri.clone(), diagnostics, Some(snapshot.version))
            .await;
    }

    /// The analysis for the latest known version of `uri`, running the pipeline if the cache lags behind.
    ///
    /// The core always runs to completion; a result whose version was superseded meanwhile is returned to the
    /// caller but not cached.
    async fn current_analysis(&self, uri: &Url) -> Option<Snapshot> {
        let (source, version) = {
            let docs = self.documents.read().await;
            let state = docs.get(uri)?;
            if let Some(snapshot) = state.fresh() {
                return Some(snapshot);
            }
            (Arc::clone(&state.source), state.version)
        };

        let config = *self.config.read().await;
        let snapshot = Snapshot {
            version,
            doc: Arc::new(pipeline::analyze_source(&source, &config)),
            source,
        };

        let mut docs = self.documents.write().await;
        match docs.get_mut(uri) {
            Some(state) if state.version == version => state.analysis = Some(snapshot.clone()),
            _ => tracing::debug!(%uri, version, "discarding stale analysis"),
        }
        Some(snapshot)
    }
}

/// Read the settings a client may pass as `initializationOptions`.
///
/// Recognized keys: `highlightComments` (bool), `recovery` (bool), `maxErrors` (number).
fn config_from_options(options: Option<&Value>) -> Config {
    let mut config = Config::default();
    let Some(options) = options else {
        return config;
    };
    if let Some(enabled) = options.get("highlightComments").and_then(Value::as_bool) {
        config = config.with_highlight_comments(enabled);
    }
    if let Some(enabled) = options.get("recovery").and_then(Value::as_bool) {
        config = config.with_recovery(enabled);
    }
    if let Some(max) = options.get("maxErrors").and_then(Value::as_u64) {
        config = config.with_max_errors(max as usize);
    }
    config
}

#[tower_lsp::async_trait]
impl LanguageServer for JassLanguageServer {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        *self.config.write().await = config_from_options(params.initialization_options.as_ref());

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                // Real-time diagnostics via text sync
                text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
                semantic_tokens_provider: Some(SemanticTokensServerCapabilities::SemanticTokensOptions(
                    SemanticTokensOptions {
                        legend: features::semantic_legend(),
                        full: Some(SemanticTokensFullOptions::Bool(true)),
                        range: None,
                        ..Default::default()
                    },
                )),
                document_symbol_provider: Some(OneOf::Left(true)),
                folding_range_provider: Some(FoldingRangeProviderCapability::Simple(true)),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "jass-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "JASS LSP initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        let source = params.text_document.text;
        let version = params.text_document.version;

        self.analyze_document(&uri, source, version).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        // We use FULL sync, so there's only one change with the full content
        if let Some(change) = params.content_changes.into_iter().next() {
            self.analyze_document(&uri, change.text, version).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;

        // Remove document from cache
        let mut docs = self.documents.write().await;
        docs.remove(&uri);
        drop(docs);

        // Clear diagnostics
        self.client.publish_diagnostics(uri, vec![], None).await;
    }

    async fn semantic_tokens_full(&self, params: SemanticTokensParams) -> Result<Option<SemanticTokensResult>> {
        let Some(snapshot) = self.current_analysis(&params.text_document.uri).await else {
            return Ok(None);
        };
        Ok(Some(SemanticTokensResult::Tokens(SemanticTokens {
            result_id: None,
            data: features::semantic_tokens(&snapshot.doc.analysis.classifications, &snapshot.lines()),
        })))
    }

    async fn document_symbol(&self, params: DocumentSymbolParams) -> Result<Option<DocumentSymbolResponse>> {
        let uri = params.text_document.uri;
        let Some(snapshot) = self.current_analysis(&uri).await else {
            return Ok(None);
        };
        let symbols = features::symbols(&snapshot.doc.analysis.symbols, &uri, &snapshot.lines());
        Ok(Some(DocumentSymbolResponse::Flat(symbols)))
    }

    async fn folding_range(&self, params: FoldingRangeParams) -> Result<Option<Vec<FoldingRange>>> {
        let Some(snapshot) = self.current_analysis(&params.text_document.uri).await else {
            return Ok(None);
        };
        Ok(Some(features::folding_ranges(&snapshot.doc.analysis.folding_ranges)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot(version: i32, source: &str) -> Snapshot {
        Snapshot {
            version,
            source: Arc::from(source),
            doc: Arc::new(pipeline::analyze_source(source, &Config::default())),
        }
    }

    #[test]
    fn test_cached_analysis_is_fresh_only_for_its_version() {
        let mut state = DocumentState {
            version: 3,
            source: Arc::from("type a extends b\n"),
            analysis: Some(snapshot(2, "type a\n")),
        };
        assert!(state.fresh().is_none());

        state.analysis = Some(snapshot(3, "type a extends b\n"));
        let fresh = state.fresh().unwrap();
        assert_eq!(fresh.version, 3);
        assert!(fresh.doc.diagnostics().is_empty());
    }

    #[test]
    fn test_snapshot_positions_use_its_own_text() {
        let snapshot = snapshot(1, "globals\n string s = \"\u{1F600}\" + x\nendglobals");
        let lines = snapshot.lines();
        assert_eq!(lines.column(1, 16), 17);
    }

    #[test]
    fn test_config_defaults_without_options() {
        assert_eq!(config_from_options(None), Config::default());
    }

    #[test]
    fn test_config_from_options() {
        let options = json!({ "highlightComments": false, "recovery": false, "maxErrors": 7, "unknown": 1 });
        let config = config_from_options(Some(&options));
        assert!(!config.highlight_comments);
        assert!(!config.parser.recovery_enabled);
        assert_eq!(config.parser.max_errors, 7);
    }

    #[test]
    fn test_wrong_types_are_ignored() {
        let options = json!({ "highlightComments": "no" });
        assert_eq!(config_from_options(Some(&options)), Config::default());
    }
}
