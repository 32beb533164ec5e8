mod utils;

use entity::class_members;
use utils::prelude::*;

async fn invite(env: &Env, user: &User, class_id: i32, email: &str) -> TestResponse {
    env.post("/classroom/inviteToClass")
        .user(user)
        .json(&json!({
            "classId": class_id,
            "email": email,
        }))
        .send()
        .await
}

async fn invited_classes(env: &Env, user: &User, email: &str) -> TestResponse {
    env.post("/classroom/get_invited_classes")
        .user(user)
        .json(&json!({
            "email": email,
        }))
        .send()
        .await
}

mod invite_to_class {
    use super::*;

    #[tokio::test]
    async fn by_moderator() {
        let env = setup().await;
        let staff = env.create_user(Kind::Staff).await;
        let student = env.create_user(Kind::Regular).await;

        let classroom = env.create_classroom(&staff).await;
        let class_id = classroom["id"].as_i64().unwrap() as i32;

        let res = invite(&env, &staff, class_id, &student.email).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_json_eq!(
            res.json::<Value>().await,
            json!({
                "message": format!("{} invited successfully", student.email),
            })
        );

        // inviting again changes nothing
        let res = invite(&env, &staff, class_id, &student.email).await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = invited_classes(&env, &student, &student.email).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_json_eq!(res.json::<Value>().await, json!({ "classes": [classroom] }));
    }

    #[tokio::test]
    async fn by_class_teacher() {
        let env = setup().await;
        let staff = env.create_user(Kind::Staff).await;
        let teacher = env.create_user(Kind::Regular).await;
        let student = env.create_user(Kind::Regular).await;

        let class_id = env.create_classroom(&staff).await["id"].as_i64().unwrap() as i32;
        env.add_member(
            class_id,
            &teacher,
            class_members::Role::Teacher,
            class_members::Status::Accepted,
        )
        .await;

        let res = invite(&env, &teacher, class_id, &student.email).await;

        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn not_teacher() {
        let env = setup().await;
        let staff = env.create_user(Kind::Staff).await;
        let student = env.create_user(Kind::Regular).await;
        let other = env.create_user(Kind::Regular).await;

        let class_id = env.create_classroom(&staff).await["id"].as_i64().unwrap() as i32;
        env.add_accepted_student(class_id, &student).await;

        let res = invite(&env, &student, class_id, &other.email).await;

        assert_error!(res, error::NOT_CLASS_TEACHER);
    }

    #[tokio::test]
    async fn missing_email() {
        let env = setup().await;
        let staff = env.create_user(Kind::Staff).await;

        let class_id = env.create_classroom(&staff).await["id"].as_i64().unwrap() as i32;

        let res = env
            .post("/classroom/inviteToClass")
            .user(&staff)
            .json(&json!({
                "classId": class_id,
            }))
            .send()
            .await;

        assert_error!(res, error::EMAIL_REQUIRED);

        let res = invite(&env, &staff, class_id, "").await;

        assert_error!(res, error::EMAIL_REQUIRED);
    }

    #[tokio::test]
    async fn unknown_classroom() {
        let env = setup().await;
        let staff = env.create_user(Kind::Staff).await;
        let student = env.create_user(Kind::Regular).await;

        let res = invite(&env, &staff, 9999, &student.email).await;

        assert_error!(res, error::CLASSROOM_NOT_FOUND);
    }

    #[tokio::test]
    async fn missing_class_id() {
        let env = setup().await;
        let staff = env.create_user(Kind::Staff).await;
        let student = env.create_user(Kind::Regular).await;

        let res = env
            .post("/classroom/inviteToClass")
            .user(&staff)
            .json(&json!({
                "email": student.email,
            }))
            .send()
            .await;

        assert_error!(res, error::CLASSROOM_NOT_FOUND);

        let res = env
            .post("/classroom/inviteToClass")
            .user(&staff)
            .json(&json!({}))
            .send()
            .await;

        assert_error!(res, error::EMAIL_REQUIRED);
    }

    #[tokio::test]
    async fn unknown_user() {
        let env = setup().await;
        let staff = env.create_user(Kind::Staff).await;

        let class_id = env.create_classroom(&staff).await["id"].as_i64().unwrap() as i32;

        let res = invite(&env, &staff, class_id, "nobody@example.com").await;

        assert_error!(res, error::USER_NOT_FOUND);
    }
}

mod get_invited_classes {
    use super::*;

    #[tokio::test]
    async fn accepted_classes_are_hidden() {
        let env = setup().await;
        let staff = env.create_user(Kind::Staff).await;
        let student = env.create_user(Kind::Regular).await;

        let first = env.create_classroom(&staff).await;
        let second = env.create_classroom(&staff).await;
        let first_id = first["id"].as_i64().unwrap() as i32;
        let second_id = second["id"].as_i64().unwrap() as i32;

        invite(&env, &staff, first_id, &student.email).await;
        invite(&env, &staff, second_id, &student.email).await;

        // a pending membership still counts as invited
        env.add_member(
            second_id,
            &student,
            class_members::Role::Student,
            class_members::Status::Pending,
        )
        .await;

        let res = invited_classes(&env, &student, &student.email).await;
        assert_json_eq!(
            res.json::<Value>().await,
            json!({ "classes": [first, second] })
        );

        env.add_accepted_student(first_id, &student).await;

        let res = invited_classes(&env, &student, &student.email).await;
        assert_json_eq!(res.json::<Value>().await, json!({ "classes": [second] }));
    }

    #[tokio::test]
    async fn none() {
        let env = setup().await;
        let student = env.create_user(Kind::Regular).await;

        let res = invited_classes(&env, &student, &student.email).await;

        assert_error!(res, error::NO_INVITED_CLASSES);
    }

    #[tokio::test]
    async fn someone_else() {
        let env = setup().await;
        let staff = env.create_user(Kind::Staff).await;
        let student = env.create_user(Kind::Regular).await;
        let other = env.create_user(Kind::Regular).await;

        let class_id = env.create_classroom(&staff).await["id"].as_i64().unwrap() as i32;
        invite(&env, &staff, class_id, &student.email).await;

        let res = invited_classes(&env, &other, &student.email).await;
        assert_error!(res, error::FOREIGN_INVITATIONS);

        let res = invited_classes(&env, &staff, &student.email).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_email() {
        let env = setup().await;
        let staff = env.create_user(Kind::Staff).await;

        let res = env
            .post("/classroom/get_invited_classes")
            .user(&staff)
            .json(&json!({}))
            .send()
            .await;

        assert_error!(res, error::EMAIL_REQUIRED);
    }

    #[tokio::test]
    async fn unknown_user() {
        let env = setup().await;
        let staff = env.create_user(Kind::Staff).await;

        let res = invited_classes(&env, &staff, "nobody@example.com").await;

        assert_error!(res, error::USER_NOT_FOUND);
    }
}
