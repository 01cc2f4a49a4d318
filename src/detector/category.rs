//! 数据类别定义

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::NormalizerError;

/// 规范化结果的具体类别（封闭枚举）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    CompanyName,
    Website,
    PhoneNumber,
    Address,
    PostalCode,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::CompanyName,
        Category::Website,
        Category::PhoneNumber,
        Category::Address,
        Category::PostalCode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::CompanyName => "CompanyName",
            Category::Website => "Website",
            Category::PhoneNumber => "PhoneNumber",
            Category::Address => "Address",
            Category::PostalCode => "PostalCode",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 调用方指定的输入类型：`Auto` 交由分类器判定，其余直接对应具体类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DataType {
    #[default]
    Auto,
    CompanyName,
    Website,
    PhoneNumber,
    Address,
    PostalCode,
}

impl DataType {
    /// 具体类别（Auto 返回 None）
    pub fn category(&self) -> Option<Category> {
        match self {
            DataType::Auto => None,
            DataType::CompanyName => Some(Category::CompanyName),
            DataType::Website => Some(Category::Website),
            DataType::PhoneNumber => Some(Category::PhoneNumber),
            DataType::Address => Some(Category::Address),
            DataType::PostalCode => Some(Category::PostalCode),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self.category() {
            Some(category) => category.as_str(),
            None => "Auto",
        }
    }
}

impl From<Category> for DataType {
    fn from(category: Category) -> Self {
        match category {
            Category::CompanyName => DataType::CompanyName,
            Category::Website => DataType::Website,
            Category::PhoneNumber => DataType::PhoneNumber,
            Category::Address => DataType::Address,
            Category::PostalCode => DataType::PostalCode,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = NormalizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            return Ok(DataType::Auto);
        }
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .map(DataType::from)
            .ok_or_else(|| NormalizerError::InvalidInput(format!("未知数据类型：{}", s)))
    }
}
