//! Reader and writer for the pgsolver text format.
//!
//! ```text
//! parity 3;
//! 0 2 0 1,2 "start";
//! 1 1 1 0;
//! ```
//!
//! The header names the largest node identity. Each node statement lists
//! identity, priority, owner, a comma separated successor list and an
//! optional quoted label.

use std::io::{Read, Write};

use nudge_core::errors::{ErrorInfo, NudgeError};
use nudge_core::{NodeIndex, Player};
use tracing::debug;

use crate::game::Game;

#[derive(Debug)]
enum Token {
    Word(String),
    Label(String),
}

#[derive(Debug)]
struct Statement {
    line: usize,
    tokens: Vec<Token>,
}

/// Reads a game from `reader`.
pub fn parse_pgsolver<R: Read>(mut reader: R) -> Result<Game, NudgeError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|err| NudgeError::io("read-game", err))?;
    parse_pgsolver_str(&text)
}

/// Parses a game from pgsolver text.
pub fn parse_pgsolver_str(text: &str) -> Result<Game, NudgeError> {
    let statements = tokenize(text)?;
    let mut statements = statements.into_iter();
    let header = statements.next().ok_or_else(|| {
        parse_error("missing-header", "input does not start with a parity header", 1)
    })?;
    let node_count = parse_header(&header)?;
    let statements: Vec<Statement> = statements
        .filter(|statement| {
            !matches!(statement.tokens.first(), Some(Token::Word(word)) if word == "start")
        })
        .collect();
    if node_count > statements.len() {
        return Err(NudgeError::Parse(
            ErrorInfo::new("missing-node", "header declares more nodes than the input defines")
                .with_context("declared", node_count)
                .with_context("defined", statements.len())
                .with_context("line", header.line),
        ));
    }

    let mut game = Game::with_nodes(node_count);
    let mut defined = vec![false; node_count];
    for statement in &statements {
        parse_node(statement, &mut game, &mut defined)?;
    }
    if let Some(missing) = defined.iter().position(|seen| !seen) {
        return Err(NudgeError::Parse(
            ErrorInfo::new("missing-node", "node declared by the header is never defined")
                .with_context("node", missing),
        ));
    }
    debug!(
        nodes = game.node_count(),
        edges = game.edge_count(),
        "parsed pgsolver game"
    );
    Ok(game)
}

/// Writes `game` to `writer` in pgsolver format.
pub fn write_pgsolver<W: Write>(game: &Game, mut writer: W) -> Result<(), NudgeError> {
    writer
        .write_all(to_pgsolver_string(game).as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|err| NudgeError::io("write-game", err))
}

/// Renders `game` as pgsolver text.
pub fn to_pgsolver_string(game: &Game) -> String {
    let mut text = format!("parity {};\n", game.node_count() as i64 - 1);
    for node in game.nodes() {
        text.push_str(&format!(
            "{} {} {}",
            node,
            game.priority[node],
            game.owner[node].code()
        ));
        if !game.out[node].is_empty() {
            let successors: Vec<String> = game.out[node].iter().map(|m| m.to_string()).collect();
            text.push(' ');
            text.push_str(&successors.join(","));
        }
        if let Some(label) = &game.label[node] {
            text.push_str(&format!(" \"{label}\""));
        }
        text.push_str(";\n");
    }
    text
}

fn tokenize(text: &str) -> Result<Vec<Statement>, NudgeError> {
    let mut statements = Vec::new();
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut line = 1usize;
    let mut statement_line = 1usize;
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                flush_word(&mut word, &mut tokens);
                if tokens.is_empty() {
                    statement_line = line;
                }
                let mut label = String::new();
                let mut closed = false;
                for inner in chars.by_ref() {
                    if inner == '"' {
                        closed = true;
                        break;
                    }
                    if inner == '\n' {
                        line += 1;
                    }
                    label.push(inner);
                }
                if !closed {
                    return Err(parse_error("unterminated", "label is missing its closing quote", statement_line));
                }
                tokens.push(Token::Label(label));
            }
            ';' => {
                flush_word(&mut word, &mut tokens);
                if !tokens.is_empty() {
                    statements.push(Statement {
                        line: statement_line,
                        tokens: std::mem::take(&mut tokens),
                    });
                }
            }
            c if c.is_whitespace() => {
                flush_word(&mut word, &mut tokens);
                if c == '\n' {
                    line += 1;
                }
            }
            c => {
                if tokens.is_empty() && word.is_empty() {
                    statement_line = line;
                }
                word.push(c);
            }
        }
    }
    flush_word(&mut word, &mut tokens);
    if !tokens.is_empty() {
        return Err(parse_error("unterminated", "last statement is missing its ';'", statement_line));
    }
    Ok(statements)
}

fn flush_word(word: &mut String, tokens: &mut Vec<Token>) {
    if !word.is_empty() {
        tokens.push(Token::Word(std::mem::take(word)));
    }
}

fn parse_header(statement: &Statement) -> Result<usize, NudgeError> {
    let line = statement.line;
    match statement.tokens.as_slice() {
        [Token::Word(keyword), Token::Word(max_id)] if keyword == "parity" => {
            let max_id: i64 = max_id
                .parse()
                .map_err(|_| invalid_integer(max_id, line))?;
            if max_id < -1 {
                return Err(invalid_integer(&max_id.to_string(), line));
            }
            max_id
                .checked_add(1)
                .and_then(|count| usize::try_from(count).ok())
                .ok_or_else(|| invalid_integer(&max_id.to_string(), line))
        }
        _ => Err(parse_error("missing-header", "expected `parity <max-id>;`", line)),
    }
}

fn parse_node(statement: &Statement, game: &mut Game, defined: &mut [bool]) -> Result<(), NudgeError> {
    let line = statement.line;
    let (label, words) = match statement.tokens.split_last() {
        Some((Token::Label(label), rest)) => (Some(label.clone()), rest),
        _ => (None, statement.tokens.as_slice()),
    };
    let mut fields = Vec::with_capacity(words.len());
    for token in words {
        match token {
            Token::Word(word) => fields.push(word.as_str()),
            Token::Label(_) => {
                return Err(parse_error("misplaced-label", "label must be the last field", line));
            }
        }
    }
    let [id, priority, owner, successors @ ..] = fields.as_slice() else {
        return Err(parse_error(
            "short-statement",
            "node statements need an identity, a priority and an owner",
            line,
        ));
    };

    let id: NodeIndex = parse_integer(id, line)?;
    if id >= defined.len() {
        return Err(parse_error("node-out-of-range", "node identity exceeds the header", line)
            .with_detail("node", id));
    }
    if defined[id] {
        return Err(parse_error("duplicate-node", "node is defined twice", line).with_detail("node", id));
    }
    defined[id] = true;

    game.priority[id] = parse_integer(priority, line)?;
    let owner_code: u64 = parse_integer(owner, line)?;
    game.owner[id] = Player::from_code(owner_code).ok_or_else(|| {
        parse_error("invalid-owner", "owner must be 0 or 1", line).with_detail("owner", owner_code)
    })?;
    game.label[id] = label;

    for successor in successors.join("").split(',').filter(|piece| !piece.is_empty()) {
        let to: NodeIndex = parse_integer(successor, line)?;
        if to >= defined.len() {
            return Err(
                parse_error("successor-out-of-range", "successor exceeds the header", line)
                    .with_detail("node", id)
                    .with_detail("successor", to),
            );
        }
        game.add_edge(id, to)?;
    }
    Ok(())
}

fn parse_integer<T: std::str::FromStr>(raw: &str, line: usize) -> Result<T, NudgeError> {
    raw.parse().map_err(|_| invalid_integer(raw, line))
}

fn invalid_integer(raw: &str, line: usize) -> NudgeError {
    parse_error("invalid-integer", "expected a non-negative integer", line).with_detail("value", raw)
}

fn parse_error(code: &str, message: &str, line: usize) -> NudgeError {
    NudgeError::Parse(ErrorInfo::new(code, message).with_context("line", line))
}

trait DetailExt {
    fn with_detail(self, key: &str, value: impl ToString) -> NudgeError;
}

impl DetailExt for NudgeError {
    fn with_detail(self, key: &str, value: impl ToString) -> NudgeError {
        match self {
            NudgeError::Parse(info) => NudgeError::Parse(info.with_context(key, value)),
            other => other,
        }
    }
}
