use std::fmt;

/// `(group << 16) | element`.
pub type Tag = u32;

pub const TRANSFER_SYNTAX_UID: Tag = 0x0002_0010;
pub const SPECIFIC_CHARACTER_SET: Tag = 0x0008_0005;
pub const MODALITY: Tag = 0x0008_0060;
pub const SLICE_THICKNESS: Tag = 0x0018_0050;
pub const SPACING_BETWEEN_SLICES: Tag = 0x0018_0088;
pub const SAMPLES_PER_PIXEL: Tag = 0x0028_0002;
pub const PHOTOMETRIC_INTERPRETATION: Tag = 0x0028_0004;
pub const PLANAR_CONFIGURATION: Tag = 0x0028_0006;
pub const NUMBER_OF_FRAMES: Tag = 0x0028_0008;
pub const ROWS: Tag = 0x0028_0010;
pub const COLUMNS: Tag = 0x0028_0011;
pub const PIXEL_SPACING: Tag = 0x0028_0030;
pub const BITS_ALLOCATED: Tag = 0x0028_0100;
pub const BITS_STORED: Tag = 0x0028_0101;
pub const PIXEL_REPRESENTATION: Tag = 0x0028_0103;
pub const WINDOW_CENTER: Tag = 0x0028_1050;
pub const WINDOW_WIDTH: Tag = 0x0028_1051;
pub const RESCALE_INTERCEPT: Tag = 0x0028_1052;
pub const RESCALE_SLOPE: Tag = 0x0028_1053;
pub const ICON_IMAGE_SEQUENCE: Tag = 0x0088_0200;
pub const PIXEL_DATA: Tag = 0x7FE0_0010;

pub const ITEM: Tag = 0xFFFE_E000;
pub const ITEM_DELIMITATION: Tag = 0xFFFE_E00D;
pub const SEQUENCE_DELIMITATION: Tag = 0xFFFE_E0DD;

pub const UNDEFINED_LENGTH: u32 = 0xFFFF_FFFF;

/// Value Representation of a data element.
///
/// `QQ` is the `??` marker some legacy writers emit, `Implicit` is a VR that
/// neither the stream nor the dictionary could resolve.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vr {
    AE,
    AS,
    AT,
    CS,
    DA,
    DS,
    DT,
    FD,
    FL,
    IS,
    LO,
    LT,
    OB,
    OD,
    OF,
    OW,
    PN,
    SH,
    SL,
    SQ,
    SS,
    ST,
    TM,
    UI,
    UL,
    UN,
    US,
    UT,
    QQ,
    RT,
    Implicit,
}

impl Vr {
    pub fn from_code(code: [u8; 2]) -> Option<Vr> {
        let vr = match &code {
            b"AE" => Vr::AE,
            b"AS" => Vr::AS,
            b"AT" => Vr::AT,
            b"CS" => Vr::CS,
            b"DA" => Vr::DA,
            b"DS" => Vr::DS,
            b"DT" => Vr::DT,
            b"FD" => Vr::FD,
            b"FL" => Vr::FL,
            b"IS" => Vr::IS,
            b"LO" => Vr::LO,
            b"LT" => Vr::LT,
            b"OB" => Vr::OB,
            b"OD" => Vr::OD,
            b"OF" => Vr::OF,
            b"OW" => Vr::OW,
            b"PN" => Vr::PN,
            b"SH" => Vr::SH,
            b"SL" => Vr::SL,
            b"SQ" => Vr::SQ,
            b"SS" => Vr::SS,
            b"ST" => Vr::ST,
            b"TM" => Vr::TM,
            b"UI" => Vr::UI,
            b"UL" => Vr::UL,
            b"UN" => Vr::UN,
            b"US" => Vr::US,
            b"UT" => Vr::UT,
            b"??" => Vr::QQ,
            b"RT" => Vr::RT,
            _ => return None,
        };

        Some(vr)
    }

    pub fn code(self) -> &'static str {
        match self {
            Vr::AE => "AE",
            Vr::AS => "AS",
            Vr::AT => "AT",
            Vr::CS => "CS",
            Vr::DA => "DA",
            Vr::DS => "DS",
            Vr::DT => "DT",
            Vr::FD => "FD",
            Vr::FL => "FL",
            Vr::IS => "IS",
            Vr::LO => "LO",
            Vr::LT => "LT",
            Vr::OB => "OB",
            Vr::OD => "OD",
            Vr::OF => "OF",
            Vr::OW => "OW",
            Vr::PN => "PN",
            Vr::SH => "SH",
            Vr::SL => "SL",
            Vr::SQ => "SQ",
            Vr::SS => "SS",
            Vr::ST => "ST",
            Vr::TM => "TM",
            Vr::UI => "UI",
            Vr::UL => "UL",
            Vr::UN => "UN",
            Vr::US => "US",
            Vr::UT => "UT",
            Vr::QQ => "??",
            Vr::RT => "RT",
            Vr::Implicit => "--",
        }
    }

    /// Explicit encodings with two reserved bytes and a 32-bit length.
    pub fn has_long_length(self) -> bool {
        matches!(self, Vr::OB | Vr::OD | Vr::OF | Vr::OW | Vr::SQ | Vr::UN | Vr::UT)
    }
}

impl fmt::Display for Vr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A decoded tag header; the cursor sits on the first value byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementHeader {
    pub tag: Tag,
    pub vr: Vr,
    /// Zero when `undefined_length` is set.
    pub length: u32,
    pub undefined_length: bool,
    pub explicit: bool,
}

impl ElementHeader {
    pub fn group(&self) -> u16 {
        (self.tag >> 16) as u16
    }
}

/// One element as seen by the walk. Nothing keeps these around.
#[derive(Debug, Clone, PartialEq)]
pub struct DataElement {
    pub header: ElementHeader,
    pub name: Option<String>,
    /// Text rendering of the value, `None` when the content was skipped,
    /// suppressed or belongs to the caller-side dispatch.
    pub value: Option<String>,
    pub depth: usize,
}

impl DataElement {
    /// The header line for a dump, or `None` for elements that carry no
    /// description (items, delimiters, skipped content without a name).
    pub fn describe(&self) -> Option<String> {
        let line = match (&self.name, &self.value) {
            (Some(name), Some(value)) => format!("{}: {}", name, value),
            (Some(name), None) => format!("{}: ", name),
            (None, Some(value)) if !value.is_empty() => format!("Private Tag: {}", value),
            _ => return None,
        };

        if self.depth > 0 && self.header.vr != Vr::SQ {
            Some(format!(">{}", line))
        } else {
            Some(line)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DicomVersion {
    #[default]
    NotDicom,
    /// `DICM` magic found at offset 128.
    Dicom3,
    /// No preamble, the element stream starts at byte 0.
    PreDicom3,
    /// A transfer syntax this reader does not decode.
    Unknown,
}

/// Image metadata collected by the walk.
#[derive(Debug, Clone, PartialEq)]
pub struct DicomInfo {
    pub big_endian: bool,
    pub modality: String,
    pub photometric_interpretation: String,
    pub transfer_syntax_uid: String,
    pub samples_per_pixel: u16,
    /// 0 unsigned, 1 two's complement.
    pub pixel_representation: u16,
    pub planar_configuration: u16,
    pub height: u16,
    pub width: u16,
    /// Bits allocated per sample.
    pub pixel_depth: u16,
    pub bits_stored: u16,
    pub number_of_frames: u32,
    pub window_center: i32,
    pub window_width: i32,
    pub rescale_slope: f64,
    pub rescale_intercept: f64,
    /// Row spacing, column spacing in mm.
    pub pixel_spacing: Option<(f64, f64)>,
    pub slice_thickness: Option<f64>,
    pub spacing_between_slices: Option<f64>,
    pub pixel_data_offset: u64,
    pub pixel_data_length: u32,
    /// Added to every decoded 16-bit sample so negative rescaled values stay
    /// representable. Physical value = stored - offset (before inversion).
    pub value_offset: i32,
    pub version: DicomVersion,
}

impl Default for DicomInfo {
    fn default() -> Self {
        DicomInfo {
            big_endian: false,
            modality: String::new(),
            photometric_interpretation: String::new(),
            transfer_syntax_uid: String::new(),
            samples_per_pixel: 1,
            pixel_representation: 0,
            planar_configuration: 0,
            height: 0,
            width: 0,
            pixel_depth: 0,
            bits_stored: 0,
            number_of_frames: 1,
            window_center: 0,
            window_width: 0,
            rescale_slope: 1.0,
            rescale_intercept: 0.0,
            pixel_spacing: None,
            slice_thickness: None,
            spacing_between_slices: None,
            pixel_data_offset: 0,
            pixel_data_length: 0,
            value_offset: 0,
            version: DicomVersion::NotDicom,
        }
    }
}

impl DicomInfo {
    pub fn is_signed(&self) -> bool {
        self.pixel_representation == 1
    }

    pub fn is_monochrome1(&self) -> bool {
        self.photometric_interpretation.starts_with("MONOCHROME1")
    }

    /// Bytes occupied by one frame of pixel data.
    pub fn required_bytes(&self) -> usize {
        self.height as usize * self.width as usize * (self.pixel_depth as usize / 8)
            * self.samples_per_pixel as usize
    }
}
