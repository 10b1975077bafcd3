/// 文本片段的字符类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// CJK 统一汉字（U+4E00..=U+9FFF）
    Ideograph,
    /// 十进制数字（半角/全角）
    Numeral,
    /// ASCII 字母
    Latin,
    /// 其他（标点、空白、假名等）
    Other,
}

/// 切分得到的一段：同类字符的最长连续串。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
}

impl Segment {
    pub fn new(kind: SegmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// 一次解析的结果：音节 token 序列 + 两个标记。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// 按原文顺序排列的音节
    pub tokens: Vec<String>,
    /// 含多音字（读音取了默认值）
    pub has_ambiguity: bool,
    /// 有无法转写的内容（无读音的字、超范围数字、其他字符）
    pub has_unresolved: bool,
}

impl Resolution {
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        Self {
            tokens,
            ..Self::default()
        }
    }

    /// 只带“未解析”标记、没有 token 的结果。
    pub fn unresolved() -> Self {
        Self {
            has_unresolved: true,
            ..Self::default()
        }
    }

    /// 追加另一段的结果：token 依次拼接，标记取并。
    pub fn absorb(&mut self, other: Resolution) {
        self.tokens.extend(other.tokens);
        self.has_ambiguity |= other.has_ambiguity;
        self.has_unresolved |= other.has_unresolved;
    }

    /// 全拼编码：token 以空格连接。
    pub fn full_code(&self) -> String {
        self.tokens.join(" ").trim().to_string()
    }

    /// 简拼编码：每个 token 的首字符。
    pub fn abbrev_code(&self) -> String {
        self.tokens.iter().filter_map(|t| t.chars().next()).collect()
    }

    pub fn needs_review(&self) -> bool {
        self.has_ambiguity || self.has_unresolved
    }
}

/// 人名展开后的一条：`display` 为词条文本，`lookup` 为实际注音的文本。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameVariant {
    pub display: String,
    pub lookup: String,
}

impl NameVariant {
    pub fn new(display: impl Into<String>, lookup: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            lookup: lookup.into(),
        }
    }
}

/// 已解析的词条，生成后不再修改。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub display_text: String,
    pub lookup_text: String,
    pub resolution: Resolution,
}

impl ResolvedEntry {
    pub fn new(variant: NameVariant, resolution: Resolution) -> Self {
        Self {
            display_text: variant.display,
            lookup_text: variant.lookup,
            resolution,
        }
    }
}
