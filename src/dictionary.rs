use std::{
    borrow::Cow,
    collections::HashMap,
    io::{self, BufRead},
    path::Path,
};

use lazy_static::lazy_static;
use regex::Regex;

use crate::dictionary_table::STANDARD_ELEMENTS;
use crate::model::{Tag, Vr};
use crate::CommonResult;

#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryEntry {
    pub vr: Vr,
    pub name: Cow<'static, str>,
}

// 重复组的tag里用x表示任意一位十六进制
const REPEATING_GROUP_ELEMENTS: &[(&str, Vr, &str)] = &[
    ("xxxx0000", Vr::UL, "Group Length"),
    ("50xx0005", Vr::US, "Curve Dimensions"),
    ("50xx0010", Vr::US, "Number of Points"),
    ("50xx0020", Vr::CS, "Type of Data"),
    ("50xx3000", Vr::OW, "Curve Data"),
    ("60xx0010", Vr::US, "Overlay Rows"),
    ("60xx0011", Vr::US, "Overlay Columns"),
    ("60xx0040", Vr::CS, "Overlay Type"),
    ("60xx0050", Vr::SS, "Overlay Origin"),
    ("60xx0100", Vr::US, "Overlay Bits Allocated"),
    ("60xx0102", Vr::US, "Overlay Bit Position"),
    ("60xx3000", Vr::OW, "Overlay Data"),
    ("7Fxx0010", Vr::OW, "Variable Pixel Data"),
];

lazy_static! {
    static ref STANDARD_EXACT: HashMap<Tag, DictionaryEntry> = STANDARD_ELEMENTS
        .iter()
        .map(|(tag, vr, name)| {
            (
                *tag,
                DictionaryEntry {
                    vr: *vr,
                    name: Cow::Borrowed(*name),
                },
            )
        })
        .collect();
    static ref STANDARD_WILDCARD: Vec<(Regex, DictionaryEntry)> = REPEATING_GROUP_ELEMENTS
        .iter()
        .filter_map(|(pattern, vr, name)| {
            let regex = wildcard_regex(pattern)?;
            Some((
                regex,
                DictionaryEntry {
                    vr: *vr,
                    name: Cow::Borrowed(*name),
                },
            ))
        })
        .collect();
}

fn wildcard_regex(pattern: &str) -> Option<Regex> {
    let pattern = format!("^{}$", pattern.to_ascii_uppercase().replace('X', "[0-9A-F]"));

    Regex::new(&pattern).ok()
}

/// Tag to `(VR, name)` lookup.
///
/// Exact entries are keyed by the 32-bit tag; repeating-group entries are
/// only consulted when the exact lookup misses.
#[derive(Debug, Clone)]
pub struct DataElementDictionary {
    exact: HashMap<Tag, DictionaryEntry>,
    wildcard: Vec<(Regex, DictionaryEntry)>,
}

impl Default for DataElementDictionary {
    fn default() -> Self {
        Self::standard()
    }
}

impl DataElementDictionary {
    pub fn standard() -> Self {
        DataElementDictionary {
            exact: STANDARD_EXACT.clone(),
            wildcard: STANDARD_WILDCARD.clone(),
        }
    }

    pub fn empty() -> Self {
        DataElementDictionary {
            exact: HashMap::new(),
            wildcard: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.exact.len() + self.wildcard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn lookup(&self, tag: Tag) -> Option<&DictionaryEntry> {
        if let Some(entry) = self.exact.get(&tag) {
            return Some(entry);
        }

        if self.wildcard.is_empty() {
            return None;
        }

        let hex = crate::util::tag_hex(tag);

        self.wildcard
            .iter()
            .find(|(regex, _)| regex.is_match(&hex))
            .map(|(_, entry)| entry)
    }

    pub fn vr_of(&self, tag: Tag) -> Option<Vr> {
        self.lookup(tag).map(|entry| entry.vr)
    }

    pub fn name_of(&self, tag: Tag) -> Option<&str> {
        self.lookup(tag).map(|entry| entry.name.as_ref())
    }

    /// Adds or replaces one entry. `tag` is either eight hex digits or
    /// `GGGG,EEEE`, with `x` standing for any hex digit.
    pub fn insert(&mut self, tag: &str, vr: Vr, name: impl Into<String>) -> bool {
        let normalized = tag
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_uppercase();

        if normalized.len() != 8 {
            return false;
        }

        let entry = DictionaryEntry {
            vr,
            name: Cow::Owned(name.into()),
        };

        if normalized.contains('X') {
            match wildcard_regex(&normalized) {
                Some(regex) => {
                    self.wildcard.insert(0, (regex, entry));
                    true
                }
                None => false,
            }
        } else {
            match u32::from_str_radix(&normalized, 16) {
                Ok(value) => {
                    self.exact.insert(value, entry);
                    true
                }
                Err(_) => false,
            }
        }
    }

    /// Reads a tab separated tag mapping file: `tag<TAB>VR<TAB>name` or
    /// `tag<TAB>name`. Returns the number of entries taken.
    pub fn load_tag_mapping(&mut self, path: &Path) -> CommonResult<usize> {
        let file = crate::util::get_file(path)?;

        // 创建一个缓冲读取器
        let reader = io::BufReader::new(file);

        let mut loaded = 0;

        // 按行读取文件
        for (number, line) in reader.lines().enumerate() {
            let text = line?;
            let text = text.trim_end_matches('\r');

            if text.trim().is_empty() || text.starts_with('#') {
                continue;
            }

            let content_vec = text.split('\t').collect::<Vec<&str>>();

            let (standard_tag, vr, standard_explanation) = match content_vec.as_slice() {
                [tag, vr, name] => {
                    let code = vr.trim().as_bytes();
                    let vr = if code.len() == 2 {
                        Vr::from_code([code[0], code[1]]).unwrap_or(Vr::Implicit)
                    } else {
                        Vr::Implicit
                    };
                    (*tag, vr, *name)
                }
                [tag, name] => (*tag, Vr::Implicit, *name),
                _ => {
                    log::warn!("{}:{} malformed tag mapping line", path.display(), number + 1);
                    continue;
                }
            };

            if self.insert(standard_tag, vr, standard_explanation.trim()) {
                loaded += 1;
            } else {
                log::warn!(
                    "{}:{} invalid tag {:?}",
                    path.display(),
                    number + 1,
                    standard_tag
                );
            }
        }

        log::debug!("{} tag mapping(s) loaded from {}", loaded, path.display());

        Ok(loaded)
    }
}
