//! 学生访问权限检查
//!
//! 学生档案是所有评估数据的挂载点，读取权限规则：
//! - 平台管理员：不受限制
//! - 校级管理员 / 教师：仅限本校学生
//! - 家长 / 学生：仅限作为监护人或本人关联的学生
//!
//! 写入权限（创建 / 更新 / 删除）只对员工角色开放，且同样受学校范围约束。

use actix_web::HttpResponse;
use std::sync::Arc;

use crate::models::{
    ApiResponse, ErrorCode,
    students::entities::Student,
    users::entities::{User, UserRole},
};
use crate::storage::Storage;

/// 读取权限检查
pub(crate) fn check_student_read_permission(
    user: &User,
    student: &Student,
) -> Result<(), HttpResponse> {
    match user.role {
        UserRole::Admin => Ok(()),
        UserRole::SchoolAdmin | UserRole::Teacher => {
            if user.belongs_to_school(student.school_id) {
                Ok(())
            } else {
                Err(HttpResponse::Forbidden().json(ApiResponse::<()>::error_empty(
                    ErrorCode::SchoolPermissionDenied,
                    "Student belongs to another school",
                )))
            }
        }
        UserRole::Parent | UserRole::Student => {
            if student.is_guardian_or_self(user.id) {
                Ok(())
            } else {
                Err(HttpResponse::Forbidden().json(ApiResponse::<()>::error_empty(
                    ErrorCode::GuardianPermissionDenied,
                    "Not a guardian of this student",
                )))
            }
        }
    }
}

/// 写入权限检查：仅员工角色，且必须在本校范围内
pub(crate) fn check_student_write_permission(
    user: &User,
    school_id: i64,
) -> Result<(), HttpResponse> {
    match user.role {
        UserRole::Admin => Ok(()),
        UserRole::SchoolAdmin | UserRole::Teacher => {
            if user.belongs_to_school(school_id) {
                Ok(())
            } else {
                Err(HttpResponse::Forbidden().json(ApiResponse::<()>::error_empty(
                    ErrorCode::SchoolPermissionDenied,
                    "Cannot manage students of another school",
                )))
            }
        }
        _ => Err(HttpResponse::Forbidden().json(ApiResponse::<()>::error_empty(
            ErrorCode::Forbidden,
            "Only staff can manage student records",
        ))),
    }
}

/// 加载学生并完成读取权限检查，失败时返回可直接响应的 HttpResponse
pub(crate) async fn load_student_checked(
    storage: &Arc<dyn Storage>,
    user: &User,
    student_id: i64,
) -> Result<Student, HttpResponse> {
    let student = match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::<()>::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Student lookup failed: {e}"),
                )),
            );
        }
    };

    check_student_read_permission(user, &student)?;
    Ok(student)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserStatus;

    fn make_user(id: i64, role: UserRole, school_id: Option<i64>) -> User {
        User {
            id,
            username: format!("user{id}"),
            email: format!("user{id}@example.com"),
            password_hash: String::new(),
            role,
            status: UserStatus::Active,
            school_id,
            display_name: None,
            avatar_url: None,
            last_login: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn make_student(id: i64, school_id: i64, parent_id: Option<i64>, user_id: Option<i64>) -> Student {
        Student {
            id,
            school_id,
            parent_id,
            user_id,
            admission_number: format!("ADM-{id}"),
            full_name: "Test Student".to_string(),
            grade_level: "10".to_string(),
            section: None,
            gender: None,
            date_of_birth: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn admin_reads_any_student() {
        let admin = make_user(1, UserRole::Admin, None);
        let student = make_student(10, 7, None, None);
        assert!(check_student_read_permission(&admin, &student).is_ok());
    }

    #[test]
    fn teacher_limited_to_own_school() {
        let teacher = make_user(2, UserRole::Teacher, Some(7));
        let same_school = make_student(10, 7, None, None);
        let other_school = make_student(11, 8, None, None);
        assert!(check_student_read_permission(&teacher, &same_school).is_ok());
        assert!(check_student_read_permission(&teacher, &other_school).is_err());
    }

    #[test]
    fn parent_limited_to_own_children() {
        let parent = make_user(3, UserRole::Parent, Some(7));
        let own_child = make_student(10, 7, Some(3), None);
        let other_child = make_student(11, 7, Some(4), None);
        assert!(check_student_read_permission(&parent, &own_child).is_ok());
        assert!(check_student_read_permission(&parent, &other_child).is_err());
    }

    #[test]
    fn student_reads_own_record() {
        let student_user = make_user(5, UserRole::Student, Some(7));
        let own_record = make_student(10, 7, None, Some(5));
        let other_record = make_student(11, 7, None, Some(6));
        assert!(check_student_read_permission(&student_user, &own_record).is_ok());
        assert!(check_student_read_permission(&student_user, &other_record).is_err());
    }

    #[test]
    fn parent_cannot_write() {
        let parent = make_user(3, UserRole::Parent, Some(7));
        assert!(check_student_write_permission(&parent, 7).is_err());
    }

    #[test]
    fn school_admin_writes_within_school() {
        let school_admin = make_user(6, UserRole::SchoolAdmin, Some(7));
        assert!(check_student_write_permission(&school_admin, 7).is_ok());
        assert!(check_student_write_permission(&school_admin, 8).is_err());
    }
}
