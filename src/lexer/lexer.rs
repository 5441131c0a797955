use crate::{
    errors::errors::{Error, ErrorImpl},
    Span, MK_TOKEN,
};

use super::{
    keywords::KEYWORD_TRIE,
    tokens::{single_char_kind, Token, TokenKind},
};

/// `[\t\n\v\f\r ]`
fn is_space(byte: u8) -> bool {
    matches!(byte, b'\t' | b'\n' | 0x0B | 0x0C | b'\r' | b' ')
}

fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// End offset of the maximal run of bytes matching `class` from `start`.
fn scan_while(bytes: &[u8], start: usize, class: fn(u8) -> bool) -> usize {
    bytes[start..]
        .iter()
        .position(|byte| !class(*byte))
        .map_or(bytes.len(), |len| start + len)
}

fn run_handler(source: &str, start: usize, kind: TokenKind, class: fn(u8) -> bool) -> Token<'_> {
    let end = scan_while(source.as_bytes(), start, class);
    MK_TOKEN!(kind, source, start, end)
}

fn string_handler(source: &str, start: usize) -> Result<Token<'_>, Error> {
    let bytes = source.as_bytes();
    let mut pos = start + 1;

    while pos < bytes.len() {
        match bytes[pos] {
            b'"' => {
                let end = pos + 1;
                return Ok(MK_TOKEN!(TokenKind::String, source, start, end));
            }
            // The escaped byte is never a terminator. Skipping a single byte
            // is safe for multi-byte chars: continuation bytes are never `"`.
            b'\\' => pos += 2,
            _ => pos += 1,
        }
    }

    Err(Error::new(ErrorImpl::UnterminatedString, Span::new(start, bytes.len()))
        .with_partial(TokenKind::String))
}

fn slash_handler(source: &str, start: usize) -> Token<'_> {
    let bytes = source.as_bytes();

    if bytes.get(start + 1) != Some(&b'/') {
        let end = start + 1;
        return MK_TOKEN!(TokenKind::Slash, source, start, end);
    }

    let end = scan_while(bytes, start, |byte| byte != b'\n');
    MK_TOKEN!(TokenKind::Comment, source, start, end)
}

fn symbol_handler(source: &str, start: usize) -> Token<'_> {
    let end = scan_while(source.as_bytes(), start, is_ident_continue);
    let word = &source[start..end];

    let kind = KEYWORD_TRIE.lookup(word).unwrap_or(TokenKind::Identifier);
    MK_TOKEN!(kind, source, start, end)
}

fn unrecognised(source: &str, start: usize) -> Error {
    let character = source[start..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
    let end = start + character.len_utf8();

    Error::new(ErrorImpl::UnrecognisedCharacter { character }, Span::new(start, end))
}

/// Scans the single token starting at `position` and returns it with the
/// offset just past it.
///
/// This is a pure function of its arguments, so restarting at any offset a
/// previous call returned reproduces the same token stream. At
/// `position == source.len()` the result is an empty `EOF` token.
pub fn next_token(source: &str, position: usize) -> Result<(Token<'_>, usize), Error> {
    if position > source.len() || !source.is_char_boundary(position) {
        return Err(Error::new(
            ErrorImpl::InvalidState { position },
            Span::new(position, position),
        ));
    }

    let Some(&byte) = source.as_bytes().get(position) else {
        return Ok((MK_TOKEN!(TokenKind::EOF, source, position, position), position));
    };

    let token = match byte {
        b'"' => string_handler(source, position)?,
        b'/' => slash_handler(source, position),
        b'0'..=b'9' => run_handler(source, position, TokenKind::Number, |b| b.is_ascii_digit()),
        b if is_space(b) => run_handler(source, position, TokenKind::Whitespace, is_space),
        b if is_ident_start(b) => symbol_handler(source, position),
        b => match single_char_kind(b) {
            Some(kind) => {
                let end = position + 1;
                MK_TOKEN!(kind, source, position, end)
            }
            None => return Err(unrecognised(source, position)),
        },
    };

    log::trace!("{}", token);
    Ok((token, token.span.end))
}

/// Cursor over a source text. Holds nothing but the current offset and
/// whether end of input has been reported.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    pos: usize,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Lexer<'src> {
        Lexer::at(source, 0)
    }

    /// Starts scanning at `position`, which should be an offset a previous
    /// scan ended a token on.
    pub fn at(source: &'src str, position: usize) -> Lexer<'src> {
        Lexer {
            source,
            pos: position,
            finished: false,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns the next token. On a lexical error the cursor has already
    /// moved to [`Error::resume_at`], so calling again continues the scan.
    /// Calling again after `EOF` fails with `InvalidState`.
    pub fn next_token(&mut self) -> Result<Token<'src>, Error> {
        if self.finished {
            return Err(Error::new(
                ErrorImpl::InvalidState { position: self.pos },
                Span::new(self.pos, self.pos),
            ));
        }

        match next_token(self.source, self.pos) {
            Ok((token, end)) => {
                self.pos = end;
                self.finished = token.kind == TokenKind::EOF;
                Ok(token)
            }
            Err(error) => {
                if let ErrorImpl::InvalidState { .. } = error.kind() {
                    self.finished = true;
                } else {
                    self.pos = error.resume_at();
                }
                Err(error)
            }
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token<'src>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        Some(self.next_token())
    }
}

/// Tokenizes the whole source, ending with `EOF`. Stops at the first error.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, Error> {
    let tokens = Lexer::new(source).collect::<Result<Vec<_>, _>>()?;
    log::debug!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    Ok(tokens)
}

/// Tokenizes the whole source, recovering from every error. Partial tokens
/// (an unterminated string) are kept; unrecognised characters produce no
/// token. The returned tokens always end with `EOF`.
pub fn tokenize_with_recovery(source: &str) -> (Vec<Token<'_>>, Vec<Error>) {
    let mut tokens = vec![];
    let mut errors = vec![];

    for result in Lexer::new(source) {
        match result {
            Ok(token) => tokens.push(token),
            Err(error) => {
                log::warn!("{}; resuming at byte {}", error, error.resume_at());
                if let Some(partial) = error.partial(source) {
                    tokens.push(partial);
                }
                errors.push(error);
            }
        }
    }

    log::debug!(
        "tokenized {} bytes into {} tokens with {} errors",
        source.len(),
        tokens.len(),
        errors.len()
    );
    (tokens, errors)
}
