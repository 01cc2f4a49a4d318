//! 内置默认规则表
//! 外部规则文件缺失或某条规则为空时使用

use super::model::RuleName;

/// 公司法律后缀（整词、忽略大小写匹配；条目为正则片段）
pub const LEGAL_SUFFIXES: &[&str] = &[
    r"Incorporated",
    r"Inc\.?",
    r"Corporation",
    r"Corp\.?",
    r"Company",
    r"Co\.?",
    r"Limited",
    r"Ltd\.?",
    r"L\.?L\.?C\.?",
    r"L\.?L\.?P\.?",
    r"P\.?L\.?L\.?C\.?",
    r"L\.?P\.?",
    r"P\.?C\.?",
    r"P\.?A\.?",
];

/// 填充词
pub const FILLER_WORDS: &[&str] = &[
    "The", "A", "An", "And", "Or", "Of", "For", "To", "In", "On", "At", "By", "With",
];

/// 办公单元标识：从关键字一直吞到分号、逗号或行尾，
/// 以便完整去除 "Suite 5A & 5B"、"Unit 100-102" 这类多值写法
pub const OFFICE_PATTERNS: &[&str] = &[
    r"\b(?:Suite|Ste)\b\.?\s*#?[^,;]*",
    r"\b(?:Apartment|Apt)\b\.?\s*#?[^,;]*",
    r"\bUnit\b\.?\s*#?[^,;]*",
    r"\b(?:Floor|Fl)\b\.?\s*#?\s*\d[^,;]*",
    r"\b(?:Room|Rm)\b\.?\s*#?[^,;]*",
    r"\b(?:Building|Bldg)\b\.?\s*#?[^,;]*",
    r"#\s*[A-Za-z0-9][^,;]*",
];

/// 街道后缀（整词、忽略大小写匹配）
pub const STREET_SUFFIXES: &[&str] = &[
    "Street", "St", "Avenue", "Ave", "Av", "Road", "Rd", "Boulevard", "Blvd",
    "Drive", "Dr", "Lane", "Ln", "Court", "Ct", "Circle", "Cir", "Place", "Pl",
    "Square", "Sq", "Terrace", "Ter", "Way", "Parkway", "Pkwy", "Highway", "Hwy",
    "Freeway", "Fwy",
];

/// 方向映射（"模式=规范短写"），长模式在前避免 Northeast 被 North 部分覆盖
pub const DIRECTION_MAP: &[&str] = &[
    r"Northeast=NE",
    r"North\s+East=NE",
    r"N\.\s?E\.?=NE",
    r"NE=NE",
    r"Northwest=NW",
    r"North\s+West=NW",
    r"N\.\s?W\.?=NW",
    r"NW=NW",
    r"Southeast=SE",
    r"South\s+East=SE",
    r"S\.\s?E\.?=SE",
    r"SE=SE",
    r"Southwest=SW",
    r"South\s+West=SW",
    r"S\.\s?W\.?=SW",
    r"SW=SW",
    r"North=N",
    r"South=S",
    r"East=E",
    r"West=W",
];

/// 获取规则的内置默认值
pub fn default_rule(name: RuleName) -> &'static [&'static str] {
    match name {
        RuleName::LegalSuffixes => LEGAL_SUFFIXES,
        RuleName::FillerWords => FILLER_WORDS,
        RuleName::OfficePatterns => OFFICE_PATTERNS,
        RuleName::StreetSuffixes => STREET_SUFFIXES,
        RuleName::DirectionMap => DIRECTION_MAP,
    }
}
