use std::{
    fmt, fs,
    io::{self, BufWriter, Write},
    path::Path,
};

use fair_hash_core::FairHashTable;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::{
    error::{Error, Result},
    function_name::FunctionName,
};

/// SystemVerilog rendering of a [`FairHashTable`] as a `case`-based function.
pub struct SystemVerilog<'a> {
    table: &'a FairHashTable,
    name: &'a FunctionName,
}

impl<'a> SystemVerilog<'a> {
    pub fn new(table: &'a FairHashTable, name: &'a FunctionName) -> Self {
        Self { table, name }
    }

    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "{}", self)
    }
}

impl fmt::Display for SystemVerilog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.table.width().bits();
        let msb = width - 1;
        let name = self.name;

        writeln!(f, "// Fair hash function generated for input key width = {}", width)?;
        writeln!(
            f,
            "// Total {} entries, random seed = {}",
            self.table.len(),
            self.table.seed()
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "function automatic logic [{}:0] {}(input logic [{}:0] key);",
            msb, name, msb
        )?;
        writeln!(f, "  case (key)")?;
        for (key, value) in self.table.entries() {
            writeln!(f, "    {w}'d{:2} : {} = {w}'d{:2};", key, name, value, w = width)?;
        }
        writeln!(f, "    default : {} = '0;", name)?;
        writeln!(f, "  endcase")?;
        writeln!(f, "endfunction")
    }
}

/// Write `table` to `path` as a SystemVerilog function called `name`.
///
/// The text goes to a temporary file next to `path` which replaces `path` only once fully
/// written, so a failure never leaves a partial table behind. An existing file keeps its
/// permissions; a new one gets the usual umask-derived mode.
pub fn emit(table: &FairHashTable, name: &FunctionName, path: &Path) -> Result<()> {
    write_replacing(table, name, path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;
    debug!(path = %path.display(), "table persisted");
    Ok(())
}

fn write_replacing(table: &FairHashTable, name: &FunctionName, path: &Path) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = create_temp_in(dir)?;
    debug!(tmp = %tmp.path().display(), entries = table.len(), "rendering table");
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        SystemVerilog::new(table, name).write_to(&mut writer)?;
        writer.flush()?;
    }
    if let Ok(existing) = fs::metadata(path) {
        if existing.is_file() {
            tmp.as_file().set_permissions(existing.permissions())?;
        }
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Temporary files default to owner-only access; request the regular creation mode instead.
fn create_temp_in(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}
