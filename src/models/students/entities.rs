use serde::{Deserialize, Serialize};

// 学生性别
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(format!("Invalid gender: {s}")),
        }
    }
}

// 学生实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub school_id: i64,
    /// 监护人用户 ID（家长账号）
    pub parent_id: Option<i64>,
    /// 学生本人的登录账号 ID
    pub user_id: Option<i64>,
    /// 学号，校内唯一
    pub admission_number: String,
    pub full_name: String,
    pub grade_level: String,
    pub section: Option<String>,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Student {
    /// 用户是否为该学生的监护人或本人
    pub fn is_guardian_or_self(&self, user_id: i64) -> bool {
        self.parent_id == Some(user_id) || self.user_id == Some(user_id)
    }
}
