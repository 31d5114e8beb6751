// JSON serialization of the node-link graph

use crate::error::{Error, Result};
use crate::graph::Graph;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `graph` as JSON indented by `indent` spaces (0 = compact), followed
/// by a newline.
pub fn write_graph<W: Write>(graph: &Graph, mut writer: W, indent: usize) -> Result<()> {
    if indent == 0 {
        serde_json::to_writer(&mut writer, graph)?;
    } else {
        let indent = vec![b' '; indent];
        let mut ser = Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(&indent));
        graph.serialize(&mut ser)?;
    }
    writer.write_all(b"\n")?;
    Ok(())
}

/// Render `graph` to a string
pub fn to_json_string(graph: &Graph, indent: usize) -> Result<String> {
    let mut buf = Vec::new();
    write_graph(graph, &mut buf, indent)?;
    Ok(String::from_utf8(buf).expect("serde_json writes UTF-8"))
}

/// Write `graph` to a file, replacing any existing content
pub fn write_json_file(graph: &Graph, path: &Path, indent: usize) -> Result<()> {
    let file = File::create(path).map_err(|e| with_path(e, path))?;
    let mut writer = BufWriter::new(file);
    write_graph(graph, &mut writer, indent)?;
    writer.flush().map_err(|e| with_path(e, path))?;
    Ok(())
}

fn with_path(e: std::io::Error, path: &Path) -> Error {
    Error::Io(std::io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
}
