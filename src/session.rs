//! A line-oriented command language over a [`GraphStore`].
//!
//! Each non-blank line holds one command; a token starting with `#` begins
//! a comment that runs to the end of the line.  See
//! [`Command`] for the accepted forms.  Mutating commands produce no reply;
//! queries produce a [`Reply`] whose `Display` form is the text shown to the
//! user.

use std::{fmt, str::FromStr};

use crate::{
    edge::DEFAULT_WEIGHT,
    edge_kind::EdgeKind,
    error::{GraphError, ParseEdgeKindError},
    graph::{Adjacents, Degree, GraphStore},
    path::PathResult,
    tracing_support::debug,
};

/// Errors produced while parsing or executing a command.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("empty command")]
    EmptyCommand,
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
    #[error("{command}: missing argument <{argument}>")]
    MissingArgument {
        command: String,
        argument: &'static str,
    },
    #[error("{command}: unexpected argument {argument:?}")]
    UnexpectedArgument { command: String, argument: String },
    #[error("invalid weight {0:?}, expected a finite number")]
    InvalidWeight(String),
    #[error(transparent)]
    InvalidKind(#[from] ParseEdgeKindError),
    #[error("invalid mode {0:?}, expected \"on\" or \"off\"")]
    InvalidMode(String),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// A [`SessionError`] tagged with the 1-based script line it came from.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("line {line}: {error}")]
pub struct ScriptError {
    pub line: usize,
    #[source]
    pub error: SessionError,
}

/// One parsed command.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// `vertex <label>`
    AddVertex(String),
    /// `edge <source> <target> [weight] [directional|non-directional]`
    AddEdge {
        source: String,
        target: String,
        kind: EdgeKind,
        weight: f64,
    },
    /// `remove-vertex <label>`
    RemoveVertex(String),
    /// `remove-edge <source> <target>`
    RemoveEdge { source: String, target: String },
    /// `directed <on|off>`
    SetDirected(bool),
    /// `info`
    Info,
    /// `adjacents <label>`
    Adjacents(String),
    /// `degree <label>`
    Degree(String),
    /// `adjacent <a> <b>`
    Adjacent(String, String),
    /// `path <start> <end>`
    Path(String, String),
    /// `list`
    List,
}

struct Args<'a> {
    command: &'a str,
    tokens: std::str::SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn required(&mut self, argument: &'static str) -> Result<String, SessionError> {
        self.tokens
            .next()
            .map(str::to_string)
            .ok_or_else(|| SessionError::MissingArgument {
                command: self.command.to_string(),
                argument,
            })
    }

    fn optional(&mut self) -> Option<&'a str> {
        self.tokens.next()
    }

    fn finish(mut self, command: Command) -> Result<Command, SessionError> {
        match self.tokens.next() {
            Some(extra) => Err(SessionError::UnexpectedArgument {
                command: self.command.to_string(),
                argument: extra.to_string(),
            }),
            None => Ok(command),
        }
    }
}

impl Command {
    /// Parses one line.  Blank lines and comments yield `Ok(None)`.
    pub fn parse_line(line: &str) -> Result<Option<Command>, SessionError> {
        let mut tokens = strip_comment(line).split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };
        let mut args = Args {
            command: name,
            tokens,
        };
        let command = match name {
            "vertex" => Command::AddVertex(args.required("label")?),
            "edge" => {
                let source = args.required("source")?;
                let target = args.required("target")?;
                let mut kind = EdgeKind::default();
                let mut weight = DEFAULT_WEIGHT;
                // The weight, when given, comes before the kind.
                if let Some(token) = args.optional() {
                    match token.parse::<EdgeKind>() {
                        Ok(parsed) => kind = parsed,
                        Err(_) => {
                            weight = parse_weight(token)?;
                            if let Some(token) = args.optional() {
                                kind = token.parse()?;
                            }
                        }
                    }
                }
                Command::AddEdge {
                    source,
                    target,
                    kind,
                    weight,
                }
            }
            "remove-vertex" => Command::RemoveVertex(args.required("label")?),
            "remove-edge" => Command::RemoveEdge {
                source: args.required("source")?,
                target: args.required("target")?,
            },
            "directed" => {
                let mode = args.required("on|off")?;
                match mode.as_str() {
                    "on" => Command::SetDirected(true),
                    "off" => Command::SetDirected(false),
                    _ => return Err(SessionError::InvalidMode(mode)),
                }
            }
            "info" => Command::Info,
            "list" => Command::List,
            "adjacents" => Command::Adjacents(args.required("label")?),
            "degree" => Command::Degree(args.required("label")?),
            "adjacent" => {
                let a = args.required("a")?;
                Command::Adjacent(a, args.required("b")?)
            }
            "path" => {
                let start = args.required("start")?;
                Command::Path(start, args.required("end")?)
            }
            other => return Err(SessionError::UnknownCommand(other.to_string())),
        };
        args.finish(command).map(Some)
    }
}

impl FromStr for Command {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse_line(s)?.ok_or(SessionError::EmptyCommand)
    }
}

/// Cuts `line` at the first token that starts with `#`.  A `#` inside a
/// token belongs to that token.
fn strip_comment(line: &str) -> &str {
    let mut at_token_start = true;
    for (index, c) in line.char_indices() {
        if c == '#' && at_token_start {
            return &line[..index];
        }
        at_token_start = c.is_whitespace();
    }
    line
}

fn parse_weight(token: &str) -> Result<f64, SessionError> {
    match token.parse::<f64>() {
        Ok(weight) if weight.is_finite() => Ok(weight),
        _ => Err(SessionError::InvalidWeight(token.to_string())),
    }
}

/// The result of a query command.
#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
    Info { order: usize, size: usize },
    Adjacents(Adjacents),
    Degree(Degree),
    Adjacent(bool),
    Path(PathResult),
    /// One display line per vertex, then one per edge.
    Listing(Vec<String>),
}

fn join_or_none(labels: &[String]) -> String {
    if labels.is_empty() {
        "none".to_string()
    } else {
        labels.join(", ")
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Info { order, size } => write!(f, "order: {order}, size: {size}"),
            Reply::Adjacents(adjacents) => write!(
                f,
                "incoming: {}; outgoing: {}",
                join_or_none(&adjacents.incoming),
                join_or_none(&adjacents.outgoing)
            ),
            Reply::Degree(degree) => write!(
                f,
                "incoming: {}, outgoing: {}, total: {}",
                degree.incoming, degree.outgoing, degree.total
            ),
            Reply::Adjacent(true) => write!(f, "adjacent"),
            Reply::Adjacent(false) => write!(f, "not adjacent"),
            Reply::Path(path) => write!(f, "{path}"),
            Reply::Listing(lines) => write!(f, "{}", lines.join("\n")),
        }
    }
}

/// Applies commands to a graph it owns.
///
/// In strict mode mutations go through the checked `try_*` methods of
/// [`GraphStore`], so a duplicate vertex or an edge with a missing endpoint
/// is reported as [`SessionError::Graph`] instead of being ignored.
#[derive(Clone, Debug, Default)]
pub struct Session {
    graph: GraphStore,
    strict: bool,
}

impl Session {
    pub fn new(graph: GraphStore) -> Self {
        Self {
            graph,
            strict: false,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    pub fn into_graph(self) -> GraphStore {
        self.graph
    }

    pub fn execute(&mut self, command: Command) -> Result<Option<Reply>, SessionError> {
        debug!(?command, "execute");
        let graph = &mut self.graph;
        let reply = match command {
            Command::AddVertex(label) => {
                if self.strict {
                    graph.try_add_vertex(label)?;
                } else {
                    graph.add_vertex(label);
                }
                None
            }
            Command::AddEdge {
                source,
                target,
                kind,
                weight,
            } => {
                if self.strict {
                    graph.try_add_edge(source, target, kind, weight)?;
                } else {
                    graph.add_edge(source, target, kind, weight);
                }
                None
            }
            Command::RemoveVertex(label) => {
                if self.strict {
                    graph.try_remove_vertex(&label)?;
                } else {
                    graph.remove_vertex(&label);
                }
                None
            }
            Command::RemoveEdge { source, target } => {
                if self.strict {
                    graph.try_remove_edge(&source, &target)?;
                } else {
                    graph.remove_edge(&source, &target);
                }
                None
            }
            Command::SetDirected(directed) => {
                graph.set_directed(directed);
                None
            }
            Command::Info => Some(Reply::Info {
                order: graph.order(),
                size: graph.size(),
            }),
            Command::Adjacents(label) => Some(Reply::Adjacents(graph.adjacents(&label))),
            Command::Degree(label) => Some(Reply::Degree(graph.degree(&label))),
            Command::Adjacent(a, b) => Some(Reply::Adjacent(graph.are_adjacent(&a, &b))),
            Command::Path(start, end) => Some(Reply::Path(graph.shortest_path(&start, &end))),
            Command::List => {
                let lines = graph
                    .vertices()
                    .map(|vertex| format!("vertex {vertex}"))
                    .chain(graph.edges().map(|edge| format!("edge {edge}")))
                    .collect();
                Some(Reply::Listing(lines))
            }
        };
        Ok(reply)
    }

    /// Parses and executes one line.
    pub fn run_line(&mut self, line: &str) -> Result<Option<Reply>, SessionError> {
        match Command::parse_line(line)? {
            Some(command) => self.execute(command),
            None => Ok(None),
        }
    }

    /// Runs every line of `script`, collecting the replies.  Stops at the
    /// first failing line.
    pub fn run_script(&mut self, script: &str) -> Result<Vec<Reply>, ScriptError> {
        let mut replies = Vec::new();
        for (index, line) in script.lines().enumerate() {
            let reply = self.run_line(line).map_err(|error| ScriptError {
                line: index + 1,
                error,
            })?;
            replies.extend(reply);
        }
        Ok(replies)
    }
}
