//! Binary image parsing, symbol table collection, and DWARF line lookup.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use addr2line::Context;
use gimli::{Dwarf, EndianArcSlice, RunTimeEndian, SectionId};
use object::{Object, ObjectSection, ObjectSymbol};
use once_cell::sync::OnceCell;

use super::demangle::{make_symbol_name, map_dwarf_error};
use super::OwnedReader;
use crate::error::{InspectError, Result};
use crate::types::{Address, Architecture, SourceLocation, SymbolName};

/// One entry from the image's symbol table.
#[derive(Debug, Clone)]
pub struct SymbolEntry
{
    /// Raw and demangled name.
    pub name: SymbolName,
    /// Address of the symbol in the image's own address space.
    pub address: Address,
    /// Size in bytes, 0 when the object format does not record one.
    pub size: u64,
}

const DWARF_SECTIONS: &[(&str, &[&str])] = &[
    (".debug_abbrev", &[".debug_abbrev", "__debug_abbrev"]),
    (".debug_addr", &[".debug_addr", "__debug_addr"]),
    (".debug_aranges", &[".debug_aranges", "__debug_aranges"]),
    (".debug_info", &[".debug_info", "__debug_info"]),
    (".debug_line", &[".debug_line", "__debug_line"]),
    (".debug_line_str", &[".debug_line_str", "__debug_line_str"]),
    (".debug_ranges", &[".debug_ranges", "__debug_ranges"]),
    (".debug_rnglists", &[".debug_rnglists", "__debug_rnglists"]),
    (".debug_str", &[".debug_str", "__debug_str"]),
    (".debug_str_offsets", &[".debug_str_offsets", "__debug_str_offsets"]),
    (".debug_types", &[".debug_types", "__debug_types"]),
    (".debug_loc", &[".debug_loc", "__debug_loc"]),
    (".debug_loclists", &[".debug_loclists", "__debug_loclists"]),
    (".debug_cu_index", &[".debug_cu_index"]),
    (".debug_tu_index", &[".debug_tu_index"]),
];

fn load_section_bytes(file: &object::File<'_>, names: &[&str]) -> Result<Arc<[u8]>>
{
    for name in names {
        if let Some(section) = file.section_by_name(name) {
            let data = section
                .uncompressed_data()
                .map_err(|err| InspectError::Dwarf(format!("failed to read {name}: {err}")))?;
            return Ok(match data {
                Cow::Borrowed(bytes) => Arc::<[u8]>::from(bytes.to_vec()),
                Cow::Owned(vec) => vec.into(),
            });
        }
    }

    Ok(Arc::<[u8]>::from(Vec::new()))
}

/// Parsed executable image with its symbol table and DWARF metadata.
///
/// Parsing reads the whole file once and eagerly collects the symbol table;
/// the `addr2line` line-lookup context is built lazily on the first line
/// query, since name-only lookups (and failures before that point) never
/// need it.
pub struct BinaryImage
{
    path: PathBuf,
    architecture: Architecture,
    endian: RunTimeEndian,
    symbols: Vec<SymbolEntry>,
    debug_sections: HashMap<&'static str, Arc<[u8]>>,
    context_cache: OnceCell<Context<OwnedReader>>,
}

impl BinaryImage
{
    /// Parse an executable from disk
    ///
    /// ## Errors
    ///
    /// - `Io`: the file could not be read
    /// - `ImageParse`: the bytes are not a recognized object format
    /// - `Dwarf`: a debug section exists but could not be decompressed
    pub fn open(path: impl AsRef<Path>) -> Result<Self>
    {
        let path = path.as_ref().to_path_buf();
        let bytes = fs::read(&path)?;
        let file = object::File::parse(&*bytes).map_err(|err| InspectError::ImageParse {
            path: path.clone(),
            reason: err.to_string(),
        })?;

        let endian = if file.is_little_endian() {
            RunTimeEndian::Little
        } else {
            RunTimeEndian::Big
        };

        let architecture = match file.architecture() {
            object::Architecture::Aarch64 => Architecture::Arm64,
            object::Architecture::X86_64 => Architecture::X86_64,
            _ => Architecture::Unknown("unknown"),
        };

        let mut symbols = Vec::new();
        for symbol in file.symbols().chain(file.dynamic_symbols()) {
            if symbol.is_undefined() {
                continue;
            }
            let Ok(name) = symbol.name() else {
                continue;
            };
            if name.is_empty() {
                continue;
            }
            symbols.push(SymbolEntry {
                name: make_symbol_name(name.to_string()),
                address: Address::from(symbol.address()),
                size: symbol.size(),
            });
        }

        let mut sections = HashMap::new();
        for (canonical, aliases) in DWARF_SECTIONS {
            let data = load_section_bytes(&file, aliases)?;
            sections.insert(*canonical, data);
        }

        Ok(Self {
            path,
            architecture,
            endian,
            symbols,
            debug_sections: sections,
            context_cache: OnceCell::new(),
        })
    }

    pub fn path(&self) -> &Path
    {
        &self.path
    }

    pub fn architecture(&self) -> Architecture
    {
        self.architecture
    }

    /// All defined, named symbols collected from the image.
    pub fn symbols(&self) -> &[SymbolEntry]
    {
        &self.symbols
    }

    /// Find the first symbol matching a query
    ///
    /// Matching is delegated to [`SymbolName::matches`]: raw linkage name,
    /// demangled name, or demangled name minus its hash disambiguator.
    pub fn find_symbol(&self, query: &str) -> Option<&SymbolEntry>
    {
        self.symbols.iter().find(|entry| entry.name.matches(query))
    }

    fn section_reader(&self, id: SectionId) -> OwnedReader
    {
        let key = match id {
            SectionId::DebugAbbrev => ".debug_abbrev",
            SectionId::DebugAddr => ".debug_addr",
            SectionId::DebugAranges => ".debug_aranges",
            SectionId::DebugInfo => ".debug_info",
            SectionId::DebugLine => ".debug_line",
            SectionId::DebugLineStr => ".debug_line_str",
            SectionId::DebugRanges => ".debug_ranges",
            SectionId::DebugRngLists => ".debug_rnglists",
            SectionId::DebugStr => ".debug_str",
            SectionId::DebugStrOffsets => ".debug_str_offsets",
            SectionId::DebugTypes => ".debug_types",
            SectionId::DebugLoc => ".debug_loc",
            SectionId::DebugLocLists => ".debug_loclists",
            SectionId::DebugCuIndex => ".debug_cu_index",
            SectionId::DebugTuIndex => ".debug_tu_index",
            _ => "",
        };

        let data = self
            .debug_sections
            .get(key)
            .cloned()
            .unwrap_or_else(|| Arc::<[u8]>::from(Vec::new()));
        EndianArcSlice::new(data, self.endian)
    }

    fn symbol_context(&self) -> Result<&Context<OwnedReader>>
    {
        self.context_cache.get_or_try_init(|| {
            let dwarf = Dwarf::load(|section| Ok::<_, gimli::Error>(self.section_reader(section)))
                .map_err(|err| map_dwarf_error("loading DWARF sections", err))?;
            Context::from_dwarf(dwarf).map_err(|err| map_dwarf_error("building line-lookup context", err))
        })
    }

    /// Look up the source location covering an image address
    ///
    /// Returns `Ok(None)` when the line table has no record for the address
    /// (missing or stripped debug info); callers decide whether that is an
    /// error.
    pub fn line_for_address(&self, address: Address) -> Result<Option<SourceLocation>>
    {
        let ctx = self.symbol_context()?;
        let location = ctx
            .find_location(address.value())
            .map_err(|err| map_dwarf_error("looking up line records", err))?;

        Ok(location.and_then(|loc| {
            loc.file.map(|file| SourceLocation {
                file: file.to_string(),
                line: loc.line,
                column: loc.column,
            })
        }))
    }
}
