//! RTF control word symbol table.
//!
//! Every known control word resolves to a `(Major, Minor)` pair: the major
//! code is the coarse category (character attribute, destination, picture
//! attribute, ...) and the minor code names the keyword within it. The table
//! is built once from [`KEYWORDS`] and shared read-only by all parsers.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Coarse classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Major {
    /// No classification (text tokens, fresh parser)
    #[default]
    None,
    /// Unknown control word
    Invalid,
    /// `{`
    BeginGroup,
    /// `}`
    EndGroup,
    /// `\rtfN`
    Version,
    /// `\deffN`
    DefFont,
    /// Document character set (`\ansi`, `\mac`, `\pc`, `\pca`)
    CharSet,
    /// Destination introducing a sub-document
    Destination,
    FontFamily,
    ColorName,
    SpecialChar,
    StyleAttr,
    DocAttr,
    SectAttr,
    TblAttr,
    ParAttr,
    CharAttr,
    PictAttr,
    BookmarkAttr,
    FieldAttr,
    PosAttr,
    ObjAttr,
    FNoteAttr,
    FontAttr,
    /// Unicode and codepage control words
    Unicode,
}

/// Fine-grained classification of a control word within its [`Major`] group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Minor {
    #[default]
    None,
    Invalid,

    // Character sets
    AnsiCharSet,
    MacCharSet,
    PcCharSet,
    PcaCharSet,

    // Destinations
    OptDest,
    FontTbl,
    FontAltName,
    FontName,
    ColorTbl,
    StyleSheet,
    Info,
    Pict,
    Object,
    ObjClass,
    ObjName,
    ObjData,
    ObjResult,
    Field,
    FieldInst,
    FieldResult,
    Footnote,
    Header,
    HeaderLeft,
    HeaderRight,
    HeaderFirst,
    Footer,
    FooterLeft,
    FooterRight,
    FooterFirst,
    Title,
    Subject,
    Author,
    Manager,
    Company,
    Operator,
    Category,
    Keywords,
    Comment,
    DocComment,
    CreationTime,
    RevisionTime,
    PrintTime,
    BackupTime,
    ListTable,
    ListOverrideTable,
    RevisionTable,
    RsidTable,
    Generator,
    BookmarkStart,
    BookmarkEnd,
    IndexEntry,
    TocEntry,
    Annotation,
    AnnotationId,
    Template,
    ParNumText,
    ParNumbering,
    BlipUid,
    NonShpPict,
    ShpPict,
    ShapeInst,
    ShapeResult,
    UnicodeDest,
    UnicodeDualDest,

    // Font families
    FamNil,
    FamRoman,
    FamSwiss,
    FamModern,
    FamScript,
    FamDecor,
    FamTech,
    FamBidi,

    // Font attributes
    FontCharSet,
    FontPitch,
    FontCodePage,
    FTypeNil,
    FTypeTrueType,

    // Colors
    Red,
    Green,
    Blue,

    // Special characters
    Par,
    Line,
    Tab,
    Page,
    Sect,
    Cell,
    Row,
    NestCell,
    NestRow,
    LeftSingleQuote,
    RightSingleQuote,
    LeftDoubleQuote,
    RightDoubleQuote,
    Bullet,
    EnDash,
    EmDash,
    EnSpace,
    EmSpace,
    QmSpace,
    ZeroWidthJoiner,
    ZeroWidthNonJoiner,
    LtrMark,
    RtlMark,
    NoBrkSpace,
    OptDash,
    NoBrkHyphen,
    Formula,
    IndexSubEntry,
    CurHeadPage,
    CurHeadDate,
    CurHeadTime,

    // Style attributes
    Additive,
    BasedOn,
    Next,
    SectStyleNum,
    TableStyleNum,
    StyleHidden,
    StyleLink,
    StyleAutoUpdate,
    StyleQuickFormat,

    // Document attributes
    DefTab,
    HyphHotZone,
    PaperWidth,
    PaperHeight,
    LeftMargin,
    RightMargin,
    TopMargin,
    BottomMargin,
    Gutter,
    FacingPage,
    Landscape,
    DefLanguage,
    ViewKind,
    ViewScale,
    WidowCtlDoc,
    FootnoteBottom,
    EndnotesAtDocEnd,

    // Section attributes
    SectDef,
    NoBreak,
    ColBreak,
    PageBreak,
    EvenBreak,
    OddBreak,
    Columns,
    ColumnSpace,
    PageNumStart,
    TitleSpecial,
    HeaderY,
    FooterY,
    SectPageWidth,
    SectPageHeight,
    SectLeftMargin,
    SectRightMargin,

    // Table attributes
    RowDef,
    RowGapH,
    CellPos,
    MergeRow,
    MergePrevious,
    RowLeft,
    RowRight,
    RowCenter,
    RowLeftEdge,
    RowHeight,
    RowHeader,
    CellBordTop,
    CellBordBottom,
    CellBordLeft,
    CellBordRight,
    CellVertAlignTop,
    CellVertAlignCenter,
    CellVertAlignBottom,
    CellShading,

    // Paragraph attributes
    ParDef,
    StyleNum,
    InTable,
    QuadLeft,
    QuadRight,
    QuadJust,
    QuadCenter,
    FirstIndent,
    LeftIndent,
    RightIndent,
    SpaceBefore,
    SpaceAfter,
    SpaceBetween,
    SpaceMultiply,
    Keep,
    KeepNext,
    PageBreakBefore,
    WidowCtl,
    NoWidowCtl,
    TabPos,
    TabRight,
    TabCenter,
    TabDecimal,
    TabBar,
    LeaderDot,
    LeaderHyphen,
    LeaderUnder,
    LtrPar,
    RtlPar,
    OutlineLevel,

    // Character attributes
    Plain,
    Bold,
    Italic,
    Underline,
    NoUnderline,
    DotUnderline,
    DbUnderline,
    WordUnderline,
    WaveUnderline,
    ThickUnderline,
    StrikeThru,
    DbStrikeThru,
    SuperScript,
    SubScript,
    NoSuperSub,
    SuperScrShift,
    SubScrShift,
    SmallCaps,
    AllCaps,
    Invisible,
    Outline,
    Shadow,
    Emboss,
    Imprint,
    FontNum,
    FontSize,
    ForeColor,
    BackColor,
    Highlight,
    Expand,
    ExpandTwips,
    CharScale,
    Kerning,
    CharStyleNum,
    Language,
    Deleted,
    Revised,
    RtlChar,
    LtrChar,

    // Picture attributes
    MacQD,
    PMMetafile,
    WinMetafile,
    DevIndBitmap,
    WinBitmap,
    PngBlip,
    JpegBlip,
    EnhancedMetafile,
    PixelBits,
    BitmapPlanes,
    BitmapWidth,
    PicWid,
    PicHt,
    PicGoalWid,
    PicGoalHt,
    PicScaleX,
    PicScaleY,
    PicScaled,
    PicCropTop,
    PicCropBottom,
    PicCropLeft,
    PicCropRight,
    PicMFHasBitmap,
    PicMFBitsPerPixel,
    BinData,

    // Bookmark attributes
    BookmarkFirstCol,
    BookmarkLastCol,

    // Field attributes
    FieldDirty,
    FieldEdited,
    FieldLocked,
    FieldPrivate,

    // Position attributes
    AbsWidth,
    AbsHeight,
    PosHorizMargin,
    PosX,
    PosY,

    // Object attributes
    ObjEmb,
    ObjLink,
    ObjAutoLink,
    ObjSub,
    ObjPub,
    ObjIcemb,
    ObjHtml,
    ObjOcx,
    ObjWid,
    ObjHt,
    ObjScaleX,
    ObjScaleY,
    ObjCropTop,
    ObjCropBottom,
    ObjCropLeft,
    ObjCropRight,
    ResultRtf,
    ResultText,
    ResultPict,
    ResultBitmap,
    ResultMerge,

    // Footnote attributes
    FootnoteRestart,
    FootnoteStart,

    // Unicode
    UnicodeChar,
    UnicodeCharBytes,
    UnicodeAnsiCodepage,
}

/// One entry of the symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    /// Control word text without the leading backslash
    pub text: &'static str,
    pub major: Major,
    pub minor: Minor,
}

const fn sym(text: &'static str, major: Major, minor: Minor) -> Symbol {
    Symbol { text, major, minor }
}

/// All control words the tokenizer recognizes.
pub static KEYWORDS: &[Symbol] = &[
    // Control symbols
    sym("*", Major::Destination, Minor::OptDest),
    sym("~", Major::SpecialChar, Minor::NoBrkSpace),
    sym("-", Major::SpecialChar, Minor::OptDash),
    sym("_", Major::SpecialChar, Minor::NoBrkHyphen),
    sym("|", Major::SpecialChar, Minor::Formula),
    sym("\n", Major::SpecialChar, Minor::Par),
    sym("\r", Major::SpecialChar, Minor::Par),
    sym("tab", Major::SpecialChar, Minor::Tab),
    // Document header
    sym("rtf", Major::Version, Minor::None),
    sym("deff", Major::DefFont, Minor::None),
    sym("ansi", Major::CharSet, Minor::AnsiCharSet),
    sym("mac", Major::CharSet, Minor::MacCharSet),
    sym("pc", Major::CharSet, Minor::PcCharSet),
    sym("pca", Major::CharSet, Minor::PcaCharSet),
    sym("ansicpg", Major::Unicode, Minor::UnicodeAnsiCodepage),
    sym("u", Major::Unicode, Minor::UnicodeChar),
    sym("uc", Major::Unicode, Minor::UnicodeCharBytes),
    sym("ud", Major::Destination, Minor::UnicodeDest),
    sym("upr", Major::Destination, Minor::UnicodeDualDest),
    // Destinations
    sym("fonttbl", Major::Destination, Minor::FontTbl),
    sym("falt", Major::Destination, Minor::FontAltName),
    sym("fname", Major::Destination, Minor::FontName),
    sym("colortbl", Major::Destination, Minor::ColorTbl),
    sym("stylesheet", Major::Destination, Minor::StyleSheet),
    sym("info", Major::Destination, Minor::Info),
    sym("pict", Major::Destination, Minor::Pict),
    sym("object", Major::Destination, Minor::Object),
    sym("objclass", Major::Destination, Minor::ObjClass),
    sym("objname", Major::Destination, Minor::ObjName),
    sym("objdata", Major::Destination, Minor::ObjData),
    sym("result", Major::Destination, Minor::ObjResult),
    sym("field", Major::Destination, Minor::Field),
    sym("fldinst", Major::Destination, Minor::FieldInst),
    sym("fldrslt", Major::Destination, Minor::FieldResult),
    sym("footnote", Major::Destination, Minor::Footnote),
    sym("header", Major::Destination, Minor::Header),
    sym("headerl", Major::Destination, Minor::HeaderLeft),
    sym("headerr", Major::Destination, Minor::HeaderRight),
    sym("headerf", Major::Destination, Minor::HeaderFirst),
    sym("footer", Major::Destination, Minor::Footer),
    sym("footerl", Major::Destination, Minor::FooterLeft),
    sym("footerr", Major::Destination, Minor::FooterRight),
    sym("footerf", Major::Destination, Minor::FooterFirst),
    sym("title", Major::Destination, Minor::Title),
    sym("subject", Major::Destination, Minor::Subject),
    sym("author", Major::Destination, Minor::Author),
    sym("manager", Major::Destination, Minor::Manager),
    sym("company", Major::Destination, Minor::Company),
    sym("operator", Major::Destination, Minor::Operator),
    sym("category", Major::Destination, Minor::Category),
    sym("keywords", Major::Destination, Minor::Keywords),
    sym("comment", Major::Destination, Minor::Comment),
    sym("doccomm", Major::Destination, Minor::DocComment),
    sym("creatim", Major::Destination, Minor::CreationTime),
    sym("revtim", Major::Destination, Minor::RevisionTime),
    sym("printim", Major::Destination, Minor::PrintTime),
    sym("buptim", Major::Destination, Minor::BackupTime),
    sym("listtable", Major::Destination, Minor::ListTable),
    sym("listoverridetable", Major::Destination, Minor::ListOverrideTable),
    sym("revtbl", Major::Destination, Minor::RevisionTable),
    sym("rsidtbl", Major::Destination, Minor::RsidTable),
    sym("generator", Major::Destination, Minor::Generator),
    sym("bkmkstart", Major::Destination, Minor::BookmarkStart),
    sym("bkmkend", Major::Destination, Minor::BookmarkEnd),
    sym("xe", Major::Destination, Minor::IndexEntry),
    sym("tc", Major::Destination, Minor::TocEntry),
    sym("annotation", Major::Destination, Minor::Annotation),
    sym("atnid", Major::Destination, Minor::AnnotationId),
    sym("template", Major::Destination, Minor::Template),
    sym("pntext", Major::Destination, Minor::ParNumText),
    sym("pn", Major::Destination, Minor::ParNumbering),
    sym("blipuid", Major::Destination, Minor::BlipUid),
    sym("nonshppict", Major::Destination, Minor::NonShpPict),
    sym("shppict", Major::Destination, Minor::ShpPict),
    sym("shpinst", Major::Destination, Minor::ShapeInst),
    sym("shprslt", Major::Destination, Minor::ShapeResult),
    // Font families
    sym("fnil", Major::FontFamily, Minor::FamNil),
    sym("froman", Major::FontFamily, Minor::FamRoman),
    sym("fswiss", Major::FontFamily, Minor::FamSwiss),
    sym("fmodern", Major::FontFamily, Minor::FamModern),
    sym("fscript", Major::FontFamily, Minor::FamScript),
    sym("fdecor", Major::FontFamily, Minor::FamDecor),
    sym("ftech", Major::FontFamily, Minor::FamTech),
    sym("fbidi", Major::FontFamily, Minor::FamBidi),
    // Font attributes
    sym("fcharset", Major::FontAttr, Minor::FontCharSet),
    sym("fprq", Major::FontAttr, Minor::FontPitch),
    sym("cpg", Major::FontAttr, Minor::FontCodePage),
    sym("ftnil", Major::FontAttr, Minor::FTypeNil),
    sym("fttruetype", Major::FontAttr, Minor::FTypeTrueType),
    // Colors
    sym("red", Major::ColorName, Minor::Red),
    sym("green", Major::ColorName, Minor::Green),
    sym("blue", Major::ColorName, Minor::Blue),
    // Special characters
    sym("par", Major::SpecialChar, Minor::Par),
    sym("line", Major::SpecialChar, Minor::Line),
    sym("page", Major::SpecialChar, Minor::Page),
    sym("sect", Major::SpecialChar, Minor::Sect),
    sym("cell", Major::SpecialChar, Minor::Cell),
    sym("row", Major::SpecialChar, Minor::Row),
    sym("nestcell", Major::SpecialChar, Minor::NestCell),
    sym("nestrow", Major::SpecialChar, Minor::NestRow),
    sym("lquote", Major::SpecialChar, Minor::LeftSingleQuote),
    sym("rquote", Major::SpecialChar, Minor::RightSingleQuote),
    sym("ldblquote", Major::SpecialChar, Minor::LeftDoubleQuote),
    sym("rdblquote", Major::SpecialChar, Minor::RightDoubleQuote),
    sym("bullet", Major::SpecialChar, Minor::Bullet),
    sym("endash", Major::SpecialChar, Minor::EnDash),
    sym("emdash", Major::SpecialChar, Minor::EmDash),
    sym("enspace", Major::SpecialChar, Minor::EnSpace),
    sym("emspace", Major::SpecialChar, Minor::EmSpace),
    sym("qmspace", Major::SpecialChar, Minor::QmSpace),
    sym("zwj", Major::SpecialChar, Minor::ZeroWidthJoiner),
    sym("zwnj", Major::SpecialChar, Minor::ZeroWidthNonJoiner),
    sym("ltrmark", Major::SpecialChar, Minor::LtrMark),
    sym("rtlmark", Major::SpecialChar, Minor::RtlMark),
    sym("chpgn", Major::SpecialChar, Minor::CurHeadPage),
    sym("chdate", Major::SpecialChar, Minor::CurHeadDate),
    sym("chtime", Major::SpecialChar, Minor::CurHeadTime),
    // Style attributes
    sym("additive", Major::StyleAttr, Minor::Additive),
    sym("sbasedon", Major::StyleAttr, Minor::BasedOn),
    sym("snext", Major::StyleAttr, Minor::Next),
    sym("ds", Major::StyleAttr, Minor::SectStyleNum),
    sym("ts", Major::StyleAttr, Minor::TableStyleNum),
    sym("shidden", Major::StyleAttr, Minor::StyleHidden),
    sym("slink", Major::StyleAttr, Minor::StyleLink),
    sym("sautoupd", Major::StyleAttr, Minor::StyleAutoUpdate),
    sym("sqformat", Major::StyleAttr, Minor::StyleQuickFormat),
    // Document attributes
    sym("deftab", Major::DocAttr, Minor::DefTab),
    sym("hyphhotz", Major::DocAttr, Minor::HyphHotZone),
    sym("paperw", Major::DocAttr, Minor::PaperWidth),
    sym("paperh", Major::DocAttr, Minor::PaperHeight),
    sym("margl", Major::DocAttr, Minor::LeftMargin),
    sym("margr", Major::DocAttr, Minor::RightMargin),
    sym("margt", Major::DocAttr, Minor::TopMargin),
    sym("margb", Major::DocAttr, Minor::BottomMargin),
    sym("gutter", Major::DocAttr, Minor::Gutter),
    sym("facingp", Major::DocAttr, Minor::FacingPage),
    sym("landscape", Major::DocAttr, Minor::Landscape),
    sym("deflang", Major::DocAttr, Minor::DefLanguage),
    sym("viewkind", Major::DocAttr, Minor::ViewKind),
    sym("viewscale", Major::DocAttr, Minor::ViewScale),
    sym("widowctrl", Major::DocAttr, Minor::WidowCtlDoc),
    sym("ftnbj", Major::DocAttr, Minor::FootnoteBottom),
    sym("aenddoc", Major::DocAttr, Minor::EndnotesAtDocEnd),
    // Section attributes
    sym("sectd", Major::SectAttr, Minor::SectDef),
    sym("sbknone", Major::SectAttr, Minor::NoBreak),
    sym("sbkcol", Major::SectAttr, Minor::ColBreak),
    sym("sbkpage", Major::SectAttr, Minor::PageBreak),
    sym("sbkeven", Major::SectAttr, Minor::EvenBreak),
    sym("sbkodd", Major::SectAttr, Minor::OddBreak),
    sym("cols", Major::SectAttr, Minor::Columns),
    sym("colsx", Major::SectAttr, Minor::ColumnSpace),
    sym("pgnstarts", Major::SectAttr, Minor::PageNumStart),
    sym("titlepg", Major::SectAttr, Minor::TitleSpecial),
    sym("headery", Major::SectAttr, Minor::HeaderY),
    sym("footery", Major::SectAttr, Minor::FooterY),
    sym("pgwsxn", Major::SectAttr, Minor::SectPageWidth),
    sym("pghsxn", Major::SectAttr, Minor::SectPageHeight),
    sym("marglsxn", Major::SectAttr, Minor::SectLeftMargin),
    sym("margrsxn", Major::SectAttr, Minor::SectRightMargin),
    // Table attributes
    sym("trowd", Major::TblAttr, Minor::RowDef),
    sym("trgaph", Major::TblAttr, Minor::RowGapH),
    sym("cellx", Major::TblAttr, Minor::CellPos),
    sym("clmgf", Major::TblAttr, Minor::MergeRow),
    sym("clmrg", Major::TblAttr, Minor::MergePrevious),
    sym("trql", Major::TblAttr, Minor::RowLeft),
    sym("trqr", Major::TblAttr, Minor::RowRight),
    sym("trqc", Major::TblAttr, Minor::RowCenter),
    sym("trleft", Major::TblAttr, Minor::RowLeftEdge),
    sym("trrh", Major::TblAttr, Minor::RowHeight),
    sym("trhdr", Major::TblAttr, Minor::RowHeader),
    sym("clbrdrt", Major::TblAttr, Minor::CellBordTop),
    sym("clbrdrb", Major::TblAttr, Minor::CellBordBottom),
    sym("clbrdrl", Major::TblAttr, Minor::CellBordLeft),
    sym("clbrdrr", Major::TblAttr, Minor::CellBordRight),
    sym("clvertalt", Major::TblAttr, Minor::CellVertAlignTop),
    sym("clvertalc", Major::TblAttr, Minor::CellVertAlignCenter),
    sym("clvertalb", Major::TblAttr, Minor::CellVertAlignBottom),
    sym("clshdng", Major::TblAttr, Minor::CellShading),
    // Paragraph attributes
    sym("pard", Major::ParAttr, Minor::ParDef),
    sym("s", Major::ParAttr, Minor::StyleNum),
    sym("intbl", Major::ParAttr, Minor::InTable),
    sym("ql", Major::ParAttr, Minor::QuadLeft),
    sym("qr", Major::ParAttr, Minor::QuadRight),
    sym("qj", Major::ParAttr, Minor::QuadJust),
    sym("qc", Major::ParAttr, Minor::QuadCenter),
    sym("fi", Major::ParAttr, Minor::FirstIndent),
    sym("li", Major::ParAttr, Minor::LeftIndent),
    sym("ri", Major::ParAttr, Minor::RightIndent),
    sym("sb", Major::ParAttr, Minor::SpaceBefore),
    sym("sa", Major::ParAttr, Minor::SpaceAfter),
    sym("sl", Major::ParAttr, Minor::SpaceBetween),
    sym("slmult", Major::ParAttr, Minor::SpaceMultiply),
    sym("keep", Major::ParAttr, Minor::Keep),
    sym("keepn", Major::ParAttr, Minor::KeepNext),
    sym("pagebb", Major::ParAttr, Minor::PageBreakBefore),
    sym("widctlpar", Major::ParAttr, Minor::WidowCtl),
    sym("nowidctlpar", Major::ParAttr, Minor::NoWidowCtl),
    sym("tx", Major::ParAttr, Minor::TabPos),
    sym("tqr", Major::ParAttr, Minor::TabRight),
    sym("tqc", Major::ParAttr, Minor::TabCenter),
    sym("tqdec", Major::ParAttr, Minor::TabDecimal),
    sym("tb", Major::ParAttr, Minor::TabBar),
    sym("tldot", Major::ParAttr, Minor::LeaderDot),
    sym("tlhyph", Major::ParAttr, Minor::LeaderHyphen),
    sym("tlul", Major::ParAttr, Minor::LeaderUnder),
    sym("ltrpar", Major::ParAttr, Minor::LtrPar),
    sym("rtlpar", Major::ParAttr, Minor::RtlPar),
    sym("outlinelevel", Major::ParAttr, Minor::OutlineLevel),
    // Character attributes
    sym("plain", Major::CharAttr, Minor::Plain),
    sym("b", Major::CharAttr, Minor::Bold),
    sym("i", Major::CharAttr, Minor::Italic),
    sym("ul", Major::CharAttr, Minor::Underline),
    sym("ulnone", Major::CharAttr, Minor::NoUnderline),
    sym("uld", Major::CharAttr, Minor::DotUnderline),
    sym("uldb", Major::CharAttr, Minor::DbUnderline),
    sym("ulw", Major::CharAttr, Minor::WordUnderline),
    sym("ulwave", Major::CharAttr, Minor::WaveUnderline),
    sym("ulth", Major::CharAttr, Minor::ThickUnderline),
    sym("strike", Major::CharAttr, Minor::StrikeThru),
    sym("striked", Major::CharAttr, Minor::DbStrikeThru),
    sym("super", Major::CharAttr, Minor::SuperScript),
    sym("sub", Major::CharAttr, Minor::SubScript),
    sym("nosupersub", Major::CharAttr, Minor::NoSuperSub),
    sym("up", Major::CharAttr, Minor::SuperScrShift),
    sym("dn", Major::CharAttr, Minor::SubScrShift),
    sym("scaps", Major::CharAttr, Minor::SmallCaps),
    sym("caps", Major::CharAttr, Minor::AllCaps),
    sym("v", Major::CharAttr, Minor::Invisible),
    sym("outl", Major::CharAttr, Minor::Outline),
    sym("shad", Major::CharAttr, Minor::Shadow),
    sym("embo", Major::CharAttr, Minor::Emboss),
    sym("impr", Major::CharAttr, Minor::Imprint),
    sym("f", Major::CharAttr, Minor::FontNum),
    sym("fs", Major::CharAttr, Minor::FontSize),
    sym("cf", Major::CharAttr, Minor::ForeColor),
    sym("cb", Major::CharAttr, Minor::BackColor),
    sym("highlight", Major::CharAttr, Minor::Highlight),
    sym("expnd", Major::CharAttr, Minor::Expand),
    sym("expndtw", Major::CharAttr, Minor::ExpandTwips),
    sym("charscalex", Major::CharAttr, Minor::CharScale),
    sym("kerning", Major::CharAttr, Minor::Kerning),
    sym("cs", Major::CharAttr, Minor::CharStyleNum),
    sym("lang", Major::CharAttr, Minor::Language),
    sym("deleted", Major::CharAttr, Minor::Deleted),
    sym("revised", Major::CharAttr, Minor::Revised),
    sym("rtlch", Major::CharAttr, Minor::RtlChar),
    sym("ltrch", Major::CharAttr, Minor::LtrChar),
    // Picture attributes
    sym("macpict", Major::PictAttr, Minor::MacQD),
    sym("pmmetafile", Major::PictAttr, Minor::PMMetafile),
    sym("wmetafile", Major::PictAttr, Minor::WinMetafile),
    sym("dibitmap", Major::PictAttr, Minor::DevIndBitmap),
    sym("wbitmap", Major::PictAttr, Minor::WinBitmap),
    sym("pngblip", Major::PictAttr, Minor::PngBlip),
    sym("jpegblip", Major::PictAttr, Minor::JpegBlip),
    sym("emfblip", Major::PictAttr, Minor::EnhancedMetafile),
    sym("wbmbitspixel", Major::PictAttr, Minor::PixelBits),
    sym("wbmplanes", Major::PictAttr, Minor::BitmapPlanes),
    sym("wbmwidthbytes", Major::PictAttr, Minor::BitmapWidth),
    sym("picw", Major::PictAttr, Minor::PicWid),
    sym("pich", Major::PictAttr, Minor::PicHt),
    sym("picwgoal", Major::PictAttr, Minor::PicGoalWid),
    sym("pichgoal", Major::PictAttr, Minor::PicGoalHt),
    sym("picscalex", Major::PictAttr, Minor::PicScaleX),
    sym("picscaley", Major::PictAttr, Minor::PicScaleY),
    sym("picscaled", Major::PictAttr, Minor::PicScaled),
    sym("piccropt", Major::PictAttr, Minor::PicCropTop),
    sym("piccropb", Major::PictAttr, Minor::PicCropBottom),
    sym("piccropl", Major::PictAttr, Minor::PicCropLeft),
    sym("piccropr", Major::PictAttr, Minor::PicCropRight),
    sym("picbmp", Major::PictAttr, Minor::PicMFHasBitmap),
    sym("picbpp", Major::PictAttr, Minor::PicMFBitsPerPixel),
    sym("bin", Major::PictAttr, Minor::BinData),
    // Bookmark attributes
    sym("bkmkcolf", Major::BookmarkAttr, Minor::BookmarkFirstCol),
    sym("bkmkcoll", Major::BookmarkAttr, Minor::BookmarkLastCol),
    // Field attributes
    sym("flddirty", Major::FieldAttr, Minor::FieldDirty),
    sym("fldedit", Major::FieldAttr, Minor::FieldEdited),
    sym("fldlock", Major::FieldAttr, Minor::FieldLocked),
    sym("fldpriv", Major::FieldAttr, Minor::FieldPrivate),
    // Position attributes
    sym("absw", Major::PosAttr, Minor::AbsWidth),
    sym("absh", Major::PosAttr, Minor::AbsHeight),
    sym("phmrg", Major::PosAttr, Minor::PosHorizMargin),
    sym("posx", Major::PosAttr, Minor::PosX),
    sym("posy", Major::PosAttr, Minor::PosY),
    // Object attributes
    sym("objemb", Major::ObjAttr, Minor::ObjEmb),
    sym("objlink", Major::ObjAttr, Minor::ObjLink),
    sym("objautlink", Major::ObjAttr, Minor::ObjAutoLink),
    sym("objsub", Major::ObjAttr, Minor::ObjSub),
    sym("objpub", Major::ObjAttr, Minor::ObjPub),
    sym("objicemb", Major::ObjAttr, Minor::ObjIcemb),
    sym("objhtml", Major::ObjAttr, Minor::ObjHtml),
    sym("objocx", Major::ObjAttr, Minor::ObjOcx),
    sym("objw", Major::ObjAttr, Minor::ObjWid),
    sym("objh", Major::ObjAttr, Minor::ObjHt),
    sym("objscalex", Major::ObjAttr, Minor::ObjScaleX),
    sym("objscaley", Major::ObjAttr, Minor::ObjScaleY),
    sym("objcropt", Major::ObjAttr, Minor::ObjCropTop),
    sym("objcropb", Major::ObjAttr, Minor::ObjCropBottom),
    sym("objcropl", Major::ObjAttr, Minor::ObjCropLeft),
    sym("objcropr", Major::ObjAttr, Minor::ObjCropRight),
    sym("rsltrtf", Major::ObjAttr, Minor::ResultRtf),
    sym("rslttxt", Major::ObjAttr, Minor::ResultText),
    sym("rsltpict", Major::ObjAttr, Minor::ResultPict),
    sym("rsltbmp", Major::ObjAttr, Minor::ResultBitmap),
    sym("rsltmerge", Major::ObjAttr, Minor::ResultMerge),
    // Footnote attributes
    sym("ftnrestart", Major::FNoteAttr, Minor::FootnoteRestart),
    sym("ftnstart", Major::FNoteAttr, Minor::FootnoteStart),
];

static TABLE: Lazy<HashMap<&'static str, Symbol>> = Lazy::new(|| {
    let mut table = HashMap::with_capacity(KEYWORDS.len());
    for symbol in KEYWORDS {
        table.insert(symbol.text, *symbol);
    }
    table
});

/// Look up a control word (without its leading backslash).
///
/// Lookup is case-sensitive, as in RTF itself.
///
/// ```
/// use rtfkit::rtf::{lookup, Major, Minor};
///
/// let symbol = lookup("fonttbl").unwrap();
/// assert_eq!((symbol.major, symbol.minor), (Major::Destination, Minor::FontTbl));
/// assert!(lookup("FONTTBL").is_none());
/// ```
#[inline]
pub fn lookup(word: &str) -> Option<&'static Symbol> {
    TABLE.get(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keywords_are_unique() {
        let mut seen = HashSet::new();
        for symbol in KEYWORDS {
            assert!(seen.insert(symbol.text), "duplicate keyword {}", symbol.text);
        }
        assert_eq!(TABLE.len(), KEYWORDS.len());
    }

    #[test]
    fn test_every_keyword_resolves() {
        for symbol in KEYWORDS {
            assert_eq!(lookup(symbol.text), Some(symbol));
        }
    }

    #[test]
    fn test_destination_keywords() {
        for word in ["fonttbl", "colortbl", "stylesheet", "info", "pict", "object"] {
            assert_eq!(lookup(word).map(|s| s.major), Some(Major::Destination));
        }
        assert_eq!(lookup("*").map(|s| s.minor), Some(Minor::OptDest));
    }

    #[test]
    fn test_escaped_line_break_is_par() {
        for text in ["\n", "\r"] {
            assert_eq!(lookup(text).map(|s| s.minor), Some(Minor::Par));
        }
    }

    #[test]
    fn test_unknown_word() {
        assert!(lookup("definitelynotaword").is_none());
        assert!(lookup("").is_none());
    }
}
