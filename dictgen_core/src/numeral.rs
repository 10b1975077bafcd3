//! 数字读音：把 0..10000 的整数转成音节序列（“一百零一”“十一”这类读法）。

/// 万以内的读法上限（不含）。
pub const NUMERAL_LIMIT: i64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumeralError {
    #[error("数字超出范围（需 0 <= n < 10000）：{0}")]
    OutOfRange(i64),
}

/// 数字读音表：十个数字 + 十/百/千 三个位名。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumeralSyllables {
    pub digits: [String; 10],
    pub ten: String,
    pub hundred: String,
    pub thousand: String,
}

impl Default for NumeralSyllables {
    /// 无声调拼音。
    fn default() -> Self {
        Self::new(
            ["ling", "yi", "er", "san", "si", "wu", "liu", "qi", "ba", "jiu"],
            "shi",
            "bai",
            "qian",
        )
    }
}

impl NumeralSyllables {
    pub fn new(digits: [&str; 10], ten: &str, hundred: &str, thousand: &str) -> Self {
        Self {
            digits: digits.map(str::to_string),
            ten: ten.to_string(),
            hundred: hundred.to_string(),
            thousand: thousand.to_string(),
        }
    }

    fn digit(&self, d: i64) -> String {
        self.digits[d as usize].clone()
    }

    fn zero(&self) -> String {
        self.digits[0].clone()
    }

    /// 把 `n` 转成音节序列。
    pub fn to_syllables(&self, n: i64) -> Result<Vec<String>, NumeralError> {
        if !(0..NUMERAL_LIMIT).contains(&n) {
            return Err(NumeralError::OutOfRange(n));
        }
        if n == 0 {
            return Ok(vec![self.zero()]);
        }

        let thousands = n / 1000;
        let hundreds = (n / 100) % 10;
        let tens = (n / 10) % 10;
        let units = n % 10;
        let mut out = Vec::new();

        if thousands != 0 {
            out.push(self.digit(thousands));
            out.push(self.thousand.clone());
        }

        if hundreds != 0 {
            out.push(self.digit(hundreds));
            out.push(self.hundred.clone());
        } else if thousands != 0 && (tens != 0 || units != 0) {
            out.push(self.zero());
        }

        if tens != 0 {
            // 只有两位数时读“十一”而不是“一十一”
            if thousands == 0 && hundreds == 0 && tens == 1 {
                out.push(self.ten.clone());
            } else {
                out.push(self.digit(tens));
                out.push(self.ten.clone());
            }
        } else if hundreds != 0 && units != 0 {
            // 百位为零时零已在上面补过
            out.push(self.zero());
        }

        if units != 0 {
            out.push(self.digit(units));
        }
        Ok(out)
    }
}

/// 把一串十进制数字解析为整数；溢出返回 `None`（调用方按超范围处理）。
pub fn parse_digits(text: &str) -> Option<i64> {
    text.chars().try_fold(0i64, |acc, ch| {
        let d = crate::segmenter::decimal_value(ch)?;
        acc.checked_mul(10)?.checked_add(i64::from(d))
    })
}
