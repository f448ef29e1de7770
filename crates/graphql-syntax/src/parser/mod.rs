pub(crate) mod grammar;

use std::borrow::Cow;

use crate::ast::{Comment, Document};
use crate::error::Error;
use crate::lexer::{lex, Token, TokenKind};
use crate::limit::DepthTracker;
use crate::location::Span;

/// Default bound on parse depth. Inputs nested past this fail with a
/// recursion limit error instead of overflowing the call stack.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options accepted by [`Parser::with_options`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Drop comments instead of attaching them to nodes.
    pub ignore_comments: bool,
    /// Leave every node's `span` unset.
    pub ignore_locations: bool,
    /// Bound on parse depth.
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            ignore_comments: false,
            ignore_locations: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parse GraphQL schemas or queries into an AST.
///
/// ## Example
///
/// The API to parse a query or a schema is the same. Here is an example of
/// parsing a query:
/// ```rust
/// use graphql_syntax::Parser;
///
/// let query = "
/// {
///     animal
///     ...snackSelection
///     ... on Pet {
///       playmates {
///         count
///       }
///     }
/// }
/// ";
/// // Create a new instance of a parser given a query above.
/// let parser = Parser::new(query);
/// // Parse the query, and return a Document.
/// let document = parser.parse().expect("the query is syntactically valid");
///
/// assert_eq!(document.definitions.len(), 1);
/// ```
///
/// Here is how you'd parse a schema:
/// ```rust
/// use graphql_syntax::Parser;
/// let core_schema = r#"
/// schema @core(feature: "https://specs.apollo.dev/join/v0.1") {
///   query: Query
///   mutation: Mutation
/// }
///
/// enum join__Graph {
///   ACCOUNTS @join__graph(name: "accounts")
/// }
/// "#;
/// let document = Parser::new(core_schema).parse().unwrap();
///
/// assert_eq!(document.definitions.len(), 2);
/// ```
#[derive(Debug)]
pub struct Parser<'a> {
    source: &'a str,
    options: ParserOptions,
    /// The current significant token; comments are stashed while advancing.
    current: Token<'a>,
    /// End offset of the last consumed significant token.
    prev_end: usize,
    depth: DepthTracker,
    /// Latest unclaimed comment cluster.
    comment: Option<Comment<'a>>,
    /// Comment clusters that were displaced before any node claimed them.
    unattached: Vec<Comment<'a>>,
}

impl<'a> Parser<'a> {
    /// Create a new instance of a parser given an input string.
    pub fn new(source: &'a str) -> Self {
        Self::with_options(source, ParserOptions::default())
    }

    /// Create a new instance of a parser with explicit options.
    pub fn with_options(source: &'a str, options: ParserOptions) -> Self {
        let max_depth = options.max_depth;
        Self {
            source,
            options,
            current: Token::eof(0),
            prev_end: 0,
            depth: DepthTracker::new(max_depth),
            comment: None,
            unattached: Vec::new(),
        }
    }

    /// Drop comments instead of attaching them to nodes.
    pub fn ignore_comments(mut self) -> Self {
        self.options.ignore_comments = true;
        self
    }

    /// Leave every node's `span` unset.
    pub fn ignore_locations(mut self) -> Self {
        self.options.ignore_locations = true;
        self
    }

    /// Configure the parse depth to allow before erroring.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.options.max_depth = max_depth;
        self.depth = DepthTracker::new(max_depth);
        self
    }

    /// Parse the input and return the document, or the first error
    /// encountered.
    pub fn parse(mut self) -> Result<Document<'a>, Error> {
        self.current = self.read_significant(0)?;
        let document = grammar::document::document(&mut self)?;
        debug_assert_eq!(self.depth.current(), 1);
        Ok(document)
    }

    /// Scan forward from `offset` to the next significant token, stashing any
    /// comment run encountered on the way.
    fn read_significant(&mut self, mut offset: usize) -> Result<Token<'a>, Error> {
        let mut cluster: Vec<Token<'a>> = Vec::new();
        let token = loop {
            let token = lex(self.source, offset)?;
            if token.kind() != TokenKind::Comment {
                break token;
            }
            offset = token.end();
            if !self.options.ignore_comments {
                cluster.push(token);
            }
        };
        if !cluster.is_empty() {
            self.stash_comment(cluster);
        }
        Ok(token)
    }

    /// Turn a run of comment tokens into a single stashed `Comment` node. A
    /// previously stashed cluster that no node claimed moves to the
    /// unattached pool.
    fn stash_comment(&mut self, cluster: Vec<Token<'a>>) {
        let Some(first) = cluster.first() else {
            return;
        };
        let span = (!self.options.ignore_locations)
            .then(|| Span::new(first.start(), cluster[cluster.len() - 1].end()));
        let text = if cluster.len() == 1 {
            match cluster.into_iter().next() {
                Some(token) => token.into_data(),
                None => Cow::Borrowed(""),
            }
        } else {
            Cow::Owned(
                cluster
                    .iter()
                    .map(Token::data)
                    .collect::<Vec<_>>()
                    .join("\n"),
            )
        };
        if let Some(displaced) = self.comment.replace(Comment { span, text }) {
            self.unattached.push(displaced);
        }
    }

    /// Consume the current token, advancing to the next significant one.
    pub(crate) fn take_current(&mut self) -> Result<Token<'a>, Error> {
        self.prev_end = self.current.end();
        let next = self.read_significant(self.prev_end)?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consume the current token and discard it.
    pub(crate) fn advance(&mut self) -> Result<(), Error> {
        self.take_current().map(drop)
    }

    /// Get the current token.
    pub(crate) fn current(&self) -> &Token<'a> {
        &self.current
    }

    /// Check if the current token is `kind`.
    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.current.kind() == kind
    }

    /// Check if the current token is the name `word`.
    pub(crate) fn at_keyword(&self, word: &str) -> bool {
        self.at(TokenKind::Name) && self.current.data() == word
    }

    /// Consume the current token if it is `kind`.
    pub(crate) fn skip(&mut self, kind: TokenKind) -> Result<bool, Error> {
        if self.at(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consume and return the current token if it is `kind`, or error.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token<'a>, Error> {
        if self.at(kind) {
            self.take_current()
        } else {
            Err(self.err_expected(kind.describe()))
        }
    }

    /// Consume and return the current token if it is the name `word`, or
    /// error.
    pub(crate) fn expect_keyword(&mut self, word: &str) -> Result<Token<'a>, Error> {
        if self.at_keyword(word) {
            self.take_current()
        } else {
            Err(self.err_expected(&format!("`{word}`")))
        }
    }

    /// Consume and return the current token if it is a name matching one of
    /// `words`, or error with the candidate list.
    pub(crate) fn expect_one_of(&mut self, words: &[&str]) -> Result<Token<'a>, Error> {
        if self.at(TokenKind::Name) && words.contains(&self.current.data()) {
            self.take_current()
        } else {
            let list = words
                .iter()
                .map(|word| format!("`{word}`"))
                .collect::<Vec<_>>()
                .join(", ");
            Err(self.err_expected(&format!("one of {list}")))
        }
    }

    /// An "expected X, got Y" error at the current token.
    pub(crate) fn err_expected(&self, what: &str) -> Error {
        if self.at(TokenKind::Eof) {
            Error::eof(format!("expected {what}, got EOF"), self.current.start())
        } else {
            Error::syntax(
                format!("expected {what}, got `{}`", self.current_text()),
                self.current_text().to_string(),
                self.current.start(),
            )
        }
    }

    /// An error with a bespoke message at the current token.
    pub(crate) fn err_at_current(&self, message: impl Into<String>) -> Error {
        if self.at(TokenKind::Eof) {
            Error::eof(message, self.current.start())
        } else {
            Error::syntax(
                message,
                self.current_text().to_string(),
                self.current.start(),
            )
        }
    }

    /// The raw source text of the current token, delimiters included.
    pub(crate) fn current_text(&self) -> &'a str {
        &self.source[self.current.start()..self.current.end()]
    }

    /// The raw source text of `token`.
    pub(crate) fn text_of(&self, token: &Token<'_>) -> &'a str {
        &self.source[token.start()..token.end()]
    }

    /// Record one level of nesting; grammar routines that build a node call
    /// this on entry and [`ascend`][Self::ascend] on exit.
    pub(crate) fn descend(&mut self) -> Result<(), Error> {
        if self.depth.check_and_increment() {
            Err(Error::RecursionLimitExceeded {
                index: self.current.start(),
            })
        } else {
            Ok(())
        }
    }

    pub(crate) fn ascend(&mut self) {
        self.depth.decrement();
    }

    /// Byte offset where the current token starts; the start of whatever node
    /// is about to be built.
    pub(crate) fn start(&self) -> usize {
        self.current.start()
    }

    /// Span from `start` to the end of the last consumed token, or `None`
    /// with `ignore_locations`.
    pub(crate) fn span_from(&self, start: usize) -> Option<Span> {
        (!self.options.ignore_locations).then(|| Span::new(start, self.prev_end))
    }

    /// The document's span: offset 0 through the last significant token.
    pub(crate) fn document_span(&self) -> Option<Span> {
        (!self.options.ignore_locations).then(|| Span::new(0, self.prev_end))
    }

    /// Claim the stashed comment cluster for the node being built.
    pub(crate) fn take_comment(&mut self) -> Option<Comment<'a>> {
        self.comment.take()
    }

    /// All comment clusters nothing claimed, including a still-stashed one.
    pub(crate) fn drain_unattached(&mut self) -> Vec<Comment<'a>> {
        if let Some(comment) = self.comment.take() {
            self.unattached.push(comment);
        }
        std::mem::take(&mut self.unattached)
    }

    /// The value of the next Name token after the current one, skipping
    /// comments, without advancing. This is the lookahead that decides what a
    /// top-level description belongs to.
    pub(crate) fn lookahead_keyword(&self) -> Result<Option<&'a str>, Error> {
        let mut offset = self.current.end();
        loop {
            let token = lex(self.source, offset)?;
            match token.kind() {
                TokenKind::Comment => offset = token.end(),
                TokenKind::Name => return Ok(Some(&self.source[token.start()..token.end()])),
                _ => return Ok(None),
            }
        }
    }
}
