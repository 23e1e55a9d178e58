use super::Context;
use crate::Error;
use std::io::Write;
use valboks::entry::Entry;

/// Marker displayed in place of the size for folders
const DIRECTORY_MARKER: &str = "<DIR>";

#[derive(Default)]
struct ColumnWidths {
    kind: usize,
    name: usize,
    size: usize,
}

impl ColumnWidths {
    fn from_iter<'a>(iter: impl Iterator<Item = &'a EntryLine<'a>>) -> Self {
        iter.fold(Self::default(), |mut res, item| {
            res.kind = res.kind.max(item.kind.len());
            res.name = res.name.max(item.name.len());
            res.size = res.size.max(item.size.len());
            res
        })
    }
}

struct EntryLine<'a> {
    kind: &'a str,
    name: &'a str,
    size: String,
}

impl<'a> From<&'a Entry> for EntryLine<'a> {
    fn from(entry: &'a Entry) -> Self {
        match entry {
            Entry::File(inner) => EntryLine {
                kind: "file",
                name: inner.name.as_str(),
                size: format!("{} bytes", inner.size),
            },
            Entry::Folder(inner) => EntryLine {
                kind: "directory",
                name: inner.name.as_str(),
                size: DIRECTORY_MARKER.to_string(),
            },
        }
    }
}

fn write_long(output: &mut dyn Write, entries: &[Entry]) -> std::io::Result<()> {
    let lines: Vec<EntryLine> = entries.iter().map(EntryLine::from).collect();
    let widths = ColumnWidths::from_iter(lines.iter());
    for line in lines {
        writeln!(
            output,
            "{:<kw$}  {:<nw$}  {:>sw$}",
            line.kind,
            line.name,
            line.size,
            kw = widths.kind,
            nw = widths.name,
            sw = widths.size,
        )?;
    }
    Ok(())
}

fn write_short(output: &mut dyn Write, entries: &[Entry]) -> std::io::Result<()> {
    for entry in entries {
        writeln!(output, "{}", entry.name())?;
    }
    Ok(())
}

#[derive(clap::Parser)]
pub struct Command {
    /// Display the kind of each entry and the size of files
    #[clap(short, long)]
    long: bool,

    /// Remote folder to list
    #[clap(default_value = "/")]
    path: String,
}

impl Command {
    #[tracing::instrument(skip_all)]
    pub async fn execute(self, ctx: &mut Context<'_>) -> Result<(), Error> {
        let storage = ctx.storage()?;
        tracing::info!("listing folder {:?}", self.path);
        let mut entries = storage
            .list_folder(&self.path)
            .await
            .map_err(Error::remote("list folder", &self.path))?;
        tracing::info!("found {} entries", entries.len());
        if entries.is_empty() {
            writeln!(ctx.output, "Folder '{}' is empty", self.path)?;
            return Ok(());
        }
        entries.sort_by(Entry::listing_order);
        if self.long {
            write_long(ctx.output, &entries)?;
        } else {
            write_short(ctx.output, &entries)?;
        }
        Ok(())
    }
}
