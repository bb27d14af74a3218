//! 文档结构化提取引擎
//!
//! 对 OCR/PDF 前置流程产出的纯文本做正则提取：科目/成绩对、出勤率、
//! 报告日期，并对提取结果做固定算术的数据质量打分。单遍、无重试。

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// 质量分权重：每个科目 8 分，上限 60
const SUBJECT_POINTS: f64 = 8.0;
const SUBJECT_POINTS_CAP: f64 = 60.0;
/// 出勤率存在加 25 分
const ATTENDANCE_POINTS: f64 = 25.0;
/// 报告日期存在加 15 分
const DATE_POINTS: f64 = 15.0;

// 科目行: "Mathematics: 87" / "Science - B+" / "English：92"
static SUBJECT_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*([A-Za-z][A-Za-z .&/]{1,40}?)\s*[:\-]\s*([A-F][+\-]?|\d{1,3}(?:\.\d+)?)\s*%?\s*$")
        .expect("Invalid subject line regex")
});

// 科目行（空格分隔 + 百分号）: "English 92%"
static SUBJECT_PERCENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*([A-Za-z][A-Za-z .&/]{1,40}?)\s+(\d{1,3}(?:\.\d+)?)\s*%\s*$")
        .expect("Invalid subject percent regex")
});

// 出勤率: "Attendance: 92%" / "attendance rate 92 %" / "出勤率 92%"
static ATTENDANCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:attendance|出勤率?)[^0-9%]{0,20}(\d{1,3}(?:\.\d+)?)\s*%")
        .expect("Invalid attendance regex")
});

// ISO 日期: 2025-03-14
static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").expect("Invalid ISO date regex"));

// 日/月/年: 14/03/2025 或 14-03-2025
static DMY_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{1,2})[/\-](\d{1,2})[/\-](\d{4})\b").expect("Invalid dmy date regex")
});

// 科目成绩对
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubjectGrade {
    pub subject: String,
    /// 统一换算为 0-100 数值分
    pub score: f64,
}

// 结构化提取结果
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedReport {
    pub subjects: Vec<SubjectGrade>,
    pub attendance_percent: Option<f64>,
    pub report_date: Option<NaiveDate>,
}

impl ExtractedReport {
    /// 学术子分：科目成绩的算术平均（无科目时为 None）
    pub fn average_subject_score(&self) -> Option<f64> {
        if self.subjects.is_empty() {
            return None;
        }
        let sum: f64 = self.subjects.iter().map(|s| s.score).sum();
        Some((sum / self.subjects.len() as f64 * 100.0).round() / 100.0)
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty() && self.attendance_percent.is_none() && self.report_date.is_none()
    }
}

/// 字母等级到数值分的固定映射
fn letter_grade_to_score(grade: &str) -> Option<f64> {
    let score = match grade {
        "A+" => 95.0,
        "A" => 90.0,
        "A-" => 85.0,
        "B+" => 80.0,
        "B" => 75.0,
        "B-" => 70.0,
        "C+" => 65.0,
        "C" => 60.0,
        "C-" => 55.0,
        "D+" => 50.0,
        "D" => 45.0,
        "D-" => 40.0,
        "E" => 30.0,
        "F" => 20.0,
        _ => return None,
    };
    Some(score)
}

fn parse_grade_value(raw: &str) -> Option<f64> {
    if let Some(score) = letter_grade_to_score(raw) {
        return Some(score);
    }
    let value: f64 = raw.parse().ok()?;
    (0.0..=100.0).contains(&value).then_some(value)
}

/// 科目名归一化：压缩空白，跳过出勤等非科目行
fn normalize_subject(raw: &str) -> Option<String> {
    let name = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if name.len() < 2 {
        return None;
    }
    let lowered = name.to_lowercase();
    const NON_SUBJECT_KEYWORDS: &[&str] = &[
        "attendance",
        "total",
        "average",
        "percentage",
        "rank",
        "result",
        "grade",
        "roll",
        "date",
    ];
    if NON_SUBJECT_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        return None;
    }
    Some(name)
}

fn push_subject(subjects: &mut Vec<SubjectGrade>, name: String, score: f64) {
    // 同名科目只保留首个匹配
    if subjects
        .iter()
        .any(|s| s.subject.eq_ignore_ascii_case(&name))
    {
        return;
    }
    subjects.push(SubjectGrade {
        subject: name,
        score,
    });
}

fn extract_date(text: &str) -> Option<NaiveDate> {
    if let Some(caps) = ISO_DATE_RE.captures(text) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
    }
    if let Some(caps) = DMY_DATE_RE.captures(text) {
        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let year: i32 = caps[3].parse().ok()?;
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
    }
    None
}

/// 对 OCR 文本做单遍结构化提取
pub fn extract_report(text: &str) -> ExtractedReport {
    let mut subjects = Vec::new();

    for caps in SUBJECT_LINE_RE.captures_iter(text) {
        let Some(name) = normalize_subject(&caps[1]) else {
            continue;
        };
        let Some(score) = parse_grade_value(caps[2].trim()) else {
            continue;
        };
        push_subject(&mut subjects, name, score);
    }

    for caps in SUBJECT_PERCENT_RE.captures_iter(text) {
        let Some(name) = normalize_subject(&caps[1]) else {
            continue;
        };
        let Some(score) = parse_grade_value(caps[2].trim()) else {
            continue;
        };
        push_subject(&mut subjects, name, score);
    }

    let attendance_percent = ATTENDANCE_RE
        .captures(text)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .filter(|v| (0.0..=100.0).contains(v));

    ExtractedReport {
        subjects,
        attendance_percent,
        report_date: extract_date(text),
    }
}

/// 数据质量分：对提取计数做固定算术，0-100
pub fn quality_score(report: &ExtractedReport) -> f64 {
    let mut score = (report.subjects.len() as f64 * SUBJECT_POINTS).min(SUBJECT_POINTS_CAP);
    if report.attendance_percent.is_some() {
        score += ATTENDANCE_POINTS;
    }
    if report.report_date.is_some() {
        score += DATE_POINTS;
    }
    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_REPORT: &str = "\
Annual Progress Report 2025-03-14

Mathematics: 87
Science - B+
English 92%
Social Studies: 78.5
Hindi: A

Attendance: 94%
Class Teacher: R. Sharma
";

    #[test]
    fn test_extracts_subject_grade_pairs() {
        let report = extract_report(SAMPLE_REPORT);
        let subjects: Vec<_> = report.subjects.iter().map(|s| s.subject.as_str()).collect();
        assert!(subjects.contains(&"Mathematics"));
        assert!(subjects.contains(&"Science"));
        assert!(subjects.contains(&"English"));
        assert!(subjects.contains(&"Social Studies"));
        assert!(subjects.contains(&"Hindi"));
    }

    #[test]
    fn test_letter_grades_mapped_to_numeric() {
        let report = extract_report(SAMPLE_REPORT);
        let science = report
            .subjects
            .iter()
            .find(|s| s.subject == "Science")
            .unwrap();
        assert_eq!(science.score, 80.0); // B+
        let hindi = report
            .subjects
            .iter()
            .find(|s| s.subject == "Hindi")
            .unwrap();
        assert_eq!(hindi.score, 90.0); // A
    }

    #[test]
    fn test_extracts_attendance() {
        let report = extract_report(SAMPLE_REPORT);
        assert_eq!(report.attendance_percent, Some(94.0));
    }

    #[test]
    fn test_extracts_cjk_attendance() {
        let report = extract_report("出勤率 92%\n");
        assert_eq!(report.attendance_percent, Some(92.0));
        let spaced = extract_report("出勤率: 92 %\n");
        assert_eq!(spaced.attendance_percent, Some(92.0));
        // 短写 "出勤" 同样有效
        let short = extract_report("出勤 88%\n");
        assert_eq!(short.attendance_percent, Some(88.0));
    }

    #[test]
    fn test_attendance_not_counted_as_subject() {
        let report = extract_report("Attendance: 94\nMathematics: 80\n");
        assert_eq!(report.subjects.len(), 1);
        assert_eq!(report.subjects[0].subject, "Mathematics");
    }

    #[test]
    fn test_extracts_iso_date() {
        let report = extract_report(SAMPLE_REPORT);
        assert_eq!(
            report.report_date,
            NaiveDate::from_ymd_opt(2025, 3, 14)
        );
    }

    #[test]
    fn test_extracts_dmy_date() {
        let report = extract_report("Report issued 14/03/2025\nMaths: 70\n");
        assert_eq!(
            report.report_date,
            NaiveDate::from_ymd_opt(2025, 3, 14)
        );
    }

    #[test]
    fn test_invalid_date_ignored() {
        let report = extract_report("Date: 2025-13-45\n");
        assert_eq!(report.report_date, None);
    }

    #[test]
    fn test_out_of_range_scores_ignored() {
        let report = extract_report("Mathematics: 870\nScience: 95\n");
        assert_eq!(report.subjects.len(), 1);
        assert_eq!(report.subjects[0].subject, "Science");
    }

    #[test]
    fn test_duplicate_subjects_keep_first() {
        let report = extract_report("Maths: 80\nmaths: 60\n");
        assert_eq!(report.subjects.len(), 1);
        assert_eq!(report.subjects[0].score, 80.0);
    }

    #[test]
    fn test_average_subject_score() {
        let report = extract_report("Maths: 80\nScience: 90\n");
        assert_eq!(report.average_subject_score(), Some(85.0));
        assert_eq!(ExtractedReport::default().average_subject_score(), None);
    }

    #[test]
    fn test_quality_score_arithmetic() {
        // 5 科目 (40) + 出勤 (25) + 日期 (15) = 80
        let report = extract_report(SAMPLE_REPORT);
        assert_eq!(report.subjects.len(), 5);
        assert_eq!(quality_score(&report), 80.0);
    }

    #[test]
    fn test_quality_score_subject_cap() {
        let report = ExtractedReport {
            subjects: (0..10)
                .map(|i| SubjectGrade {
                    subject: format!("Subject {i}"),
                    score: 60.0,
                })
                .collect(),
            attendance_percent: Some(90.0),
            report_date: NaiveDate::from_ymd_opt(2025, 1, 1),
        };
        // 科目封顶 60 + 25 + 15 = 100
        assert_eq!(quality_score(&report), 100.0);
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let report = extract_report("");
        assert!(report.is_empty());
        assert_eq!(quality_score(&report), 0.0);
    }
}
