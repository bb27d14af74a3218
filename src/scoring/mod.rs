//! 评分引擎
//!
//! 三个无状态的纯函数引擎，均为单遍计算，不依赖外部状态：
//! - `composite`: EduSight 360° 综合评分（固定权重 + 风险阈值 + 建议查表）
//! - `extraction`: OCR/PDF 文本的结构化提取（正则 + 数据质量打分）
//! - `career`: 职业匹配（特质向量与静态职业画像的加权距离）

pub mod career;
pub mod composite;
pub mod extraction;
