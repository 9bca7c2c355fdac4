//! # V A D P
//!
//! Reader and writer for the `V A D P` format described in the [module docs](super).

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Lines, Result, Write},
    path::Path,
};

use tracing::warn;

use super::*;
use crate::prelude::*;

/// Parsed `V A D P` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphFileHeader {
    pub number_of_nodes: NumNodes,
    pub number_of_edges: NumEdges,
    pub directed: bool,
    pub weighted: bool,
}

impl GraphFileHeader {
    /// Parses a header line `V A D P`; a flag is set iff it equals `1`
    fn parse(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let number_of_nodes = parse_next_value!(parts, "Header>Number of nodes");
        let number_of_edges = parse_next_value!(parts, "Header>Number of edges");
        let directed: u32 = parse_next_value!(parts, "Header>Directed flag");
        let weighted: u32 = parse_next_value!(parts, "Header>Weighted flag");

        Ok(Self {
            number_of_nodes,
            number_of_edges,
            directed: directed == 1,
            weighted: weighted == 1,
        })
    }
}

/// A GraphReader for the `V A D P` format
#[derive(Debug, Clone)]
pub struct GraphFileReader {
    /// Storage of the graphs created by this reader
    representation: Representation,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for GraphFileReader {
    fn default() -> Self {
        Self {
            representation: Representation::default(),
            comment_identifier: "c".to_string(),
        }
    }
}

impl GraphFileReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the representation of the graphs created by this reader
    pub fn representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> Self {
        self.comment_identifier = c.into();
        self
    }
}

/// Iterates over the content lines of a reader, skipping comment and blank lines
struct ContentLines<'a, R> {
    lines: Lines<R>,
    comment_identifier: &'a str,
    line_number: usize,
}

impl<R: BufRead> ContentLines<'_, R> {
    /// Returns the next content line if it exists or propagates an error
    fn next_line(&mut self) -> Result<Option<String>> {
        for line in self.lines.by_ref() {
            let line = line?;
            self.line_number += 1;

            let trimmed = line.trim();
            if trimmed.is_empty()
                || (!self.comment_identifier.is_empty() && trimmed.starts_with(self.comment_identifier))
            {
                continue;
            }
            return Ok(Some(line));
        }
        Ok(None)
    }
}

impl GraphReader<Graph> for GraphFileReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<Graph> {
        let mut lines = ContentLines {
            lines: reader.lines(),
            comment_identifier: &self.comment_identifier,
            line_number: 0,
        };

        let header = GraphFileHeader::parse(
            &lines
                .next_line()?
                .ok_or(io_error!(ErrorKind::NotFound, "Header not found"))?,
        )?;

        let mut graph = Graph::with_vertices(
            header.directed,
            header.weighted,
            self.representation,
            header.number_of_nodes,
        );

        let mut edges_read: NumEdges = 0;
        while edges_read < header.number_of_edges {
            let Some(line) = lines.next_line()? else {
                break;
            };

            let mut parts = line.split_whitespace();
            let source: String = parse_next_value!(parts, "Source node");
            let target: String = parse_next_value!(parts, "Target node");
            let weight = if header.weighted {
                parse_next_value!(parts, "Edge weight")
            } else {
                UNIT_WEIGHT
            };

            let (Some(u), Some(v)) = (graph.vertex_index(&source), graph.vertex_index(&target))
            else {
                return Err(io_error!(
                    ErrorKind::InvalidData,
                    format!(
                        "Line {}: edge ({source}, {target}) refers to an unknown vertex",
                        lines.line_number
                    )
                ));
            };

            raise_error_unless!(
                graph.add_edge(u, v, weight),
                ErrorKind::InvalidData,
                format!("Line {}: cannot add edge ({source}, {target})", lines.line_number)
            );
            edges_read += 1;
        }

        if edges_read != header.number_of_edges {
            warn!(
                expected = header.number_of_edges,
                read = edges_read,
                "fewer edges than announced in the header"
            );
        }

        Ok(graph)
    }
}

/// Trait for creating graphs from a [`GraphFileReader`] with default settings.
pub trait GraphFileRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_graph_file_format<R: BufRead>(reader: R, representation: Representation) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_from_file<P: AsRef<Path>>(path: P, representation: Representation) -> Result<Self> {
        Self::try_read_graph_file_format(BufReader::new(File::open(path)?), representation)
    }
}

impl GraphFileRead for Graph {
    fn try_read_graph_file_format<R: BufRead>(reader: R, representation: Representation) -> Result<Self> {
        GraphFileReader::new()
            .representation(representation)
            .try_read_graph(reader)
    }
}

/// A writer for the `V A D P` format.
///
/// Vertices are written by index, so reading the output yields a graph whose labels are
/// `"0"` to `"V-1"`. Undirected edges are written once (normalized), weights only for
/// weighted graphs.
#[derive(Debug, Clone, Default)]
pub struct GraphFileWriter {
    /// Optional comment written before the header
    comment: Option<String>,
}

impl GraphFileWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `comment` as a comment line (prefixed by `c `) before the header
    pub fn comment<S: Into<String>>(mut self, comment: S) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl<G> GraphWriter<G> for GraphFileWriter
where
    G: WeightedAdjacency + GraphEdgeOrder,
{
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        if let Some(comment) = &self.comment {
            for line in comment.lines() {
                writeln!(writer, "c {line}")?;
            }
        }

        writeln!(
            writer,
            "{} {} {} {}",
            graph.number_of_nodes(),
            graph.number_of_edges(),
            graph.is_directed() as u8,
            graph.is_weighted() as u8
        )?;

        for WeightedEdge(u, v, w) in graph.unique_weighted_edges() {
            if graph.is_weighted() {
                writeln!(writer, "{u} {v} {w}")?;
            } else {
                writeln!(writer, "{u} {v}")?;
            }
        }

        writer.flush()
    }
}

/// Trait for writing a graph in the `V A D P` format.
/// Shorthand for default settings.
pub trait GraphFileWrite {
    /// Tries to write the graph to a writer
    fn try_write_graph_file_format<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_graph_file_format(writer)
    }
}

impl<G> GraphFileWrite for G
where
    G: WeightedAdjacency + GraphEdgeOrder,
{
    fn try_write_graph_file_format<W: Write>(&self, writer: W) -> Result<()> {
        GraphFileWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    const WEIGHTED: &str = "c triangle
3 3 0 1

0 1 5.5
1 2 -3
2 0 2
";

    fn read(input: &str, representation: Representation) -> Result<Graph> {
        GraphFileReader::new()
            .representation(representation)
            .try_read_graph(input.as_bytes())
    }

    fn weighted_edge_list(graph: &Graph) -> Vec<WeightedEdge> {
        graph
            .weighted_edges(false)
            .sorted_by(|a, b| a.edge().cmp(&b.edge()))
            .collect()
    }

    #[test]
    fn read_weighted_undirected() {
        for repr in [Representation::Matrix, Representation::List] {
            let graph = read(WEIGHTED, repr).unwrap();

            assert_eq!(graph.representation(), repr);
            assert!(graph.is_weighted());
            assert!(graph.is_undirected());
            assert_eq!(graph.labels().collect_vec(), vec!["0", "1", "2"]);
            assert_eq!(graph.number_of_edges(), 3);
            assert_eq!(graph.edge_weight(0, 1), 5.5);
            assert_eq!(graph.edge_weight(1, 0), 5.5);
            assert_eq!(graph.edge_weight(2, 1), -3.0);
        }
    }

    #[test]
    fn read_unweighted_directed() {
        let input = "4 4 1 0\n0 1\n1 2\n2 3 9\n3 0\n";
        let graph = read(input, Representation::Matrix).unwrap();

        assert!(graph.is_directed());
        assert!(!graph.is_weighted());
        assert_eq!(graph.ordered_edges(false), vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(3, 0)]);
        assert_eq!(graph.edge_weight(2, 3), UNIT_WEIGHT);
    }

    #[test]
    fn custom_comment_identifier() {
        let input = "# header follows\n2 1 1 0\n# an edge\n0 1\n";
        let graph = GraphFileReader::new()
            .comment_identifier("#")
            .try_read_graph(input.as_bytes())
            .unwrap();
        assert!(graph.has_edge(0, 1));
    }

    #[test]
    fn fewer_edges_than_announced() {
        let graph = read("3 5 1 0\n0 1\n", Representation::List).unwrap();
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn surplus_lines_are_ignored() {
        let graph = read("3 1 1 0\n0 1\n1 2\n", Representation::List).unwrap();
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn malformed_input() {
        for input in [
            "",
            "c only a comment\n",
            "3 1 1\n",
            "x 1 1 0\n",
            "3 1 1 1\n0 1\n",
            "3 1 1 1\n0 1 heavy\n",
            "3 1 1 0\n0 7\n",
            "3 1 1 0\n0\n",
        ] {
            let err = read(input, Representation::List).unwrap_err();
            assert!(
                matches!(err.kind(), ErrorKind::InvalidData | ErrorKind::NotFound),
                "{input:?}: {err}"
            );
        }

        assert_eq!(read("", Representation::List).unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn write_then_read() {
        for (directed, weighted) in [(false, true), (true, true), (false, false), (true, false)] {
            for repr in [Representation::Matrix, Representation::List] {
                let mut graph = Graph::with_vertices(directed, weighted, repr, 5);
                graph.add_edges([(0, 1, 0.1), (1, 4, -2.5), (3, 3, 7.0), (4, 0, 1e-9), (2, 3, 3.0)]);

                let mut buffer = Vec::new();
                GraphFileWriter::new()
                    .comment("written by a test\nsecond line")
                    .try_write_graph(&graph, &mut buffer)
                    .unwrap();

                let read_back = Graph::try_read_graph_file_format(buffer.as_slice(), repr).unwrap();
                assert_eq!(read_back.is_directed(), directed);
                assert_eq!(read_back.is_weighted(), weighted);
                assert_eq!(read_back.number_of_nodes(), 5);
                assert_eq!(read_back.number_of_edges(), graph.number_of_edges());
                assert_eq!(weighted_edge_list(&read_back), weighted_edge_list(&graph));
            }
        }
    }

    #[test]
    fn write_format() {
        let graph = read(WEIGHTED, Representation::Matrix).unwrap();
        let mut buffer = Vec::new();
        graph.try_write_graph_file_format(&mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "3 3 0 1\n0 1 5.5\n0 2 2\n1 2 -3\n"
        );
    }
}
