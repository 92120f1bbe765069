//! End-to-end account and course flow against a throwaway SQLite file.
//!
//! Runs as a single test because the process-wide database connection
//! can only be initialized once.

use backend::domain::{a001_ethnic_group, a002_language, a007_course};
use backend::system::auth::password;
use backend::system::initialization;
use backend::system::users::{repository, service};
use contracts::domain::a001_ethnic_group::aggregate::EthnicGroupDto;
use contracts::domain::a002_language::aggregate::LanguageDto;
use contracts::domain::a007_course::aggregate::CourseDto;
use contracts::enums::course_availability::CourseAvailability;
use contracts::system::users::CreateUserDto;

#[tokio::test]
async fn accounts_and_courses_flow() {
    let db_file = std::env::temp_dir().join(format!("heritage_test_{}.db", uuid::Uuid::new_v4()));
    backend::shared::data::db::initialize_database(db_file.to_str())
        .await
        .expect("database initializes");
    initialization::apply_system_migration()
        .await
        .expect("account migration applies");

    // An account without an e-mail address is rejected outright
    let err = service::create_user(CreateUserDto {
        email: "   ".into(),
        ..Default::default()
    })
    .await
    .expect_err("empty email must fail");
    assert!(err.to_string().contains("Email field must be set"));

    // The domain part is lower-cased on creation, the local part kept as-is
    let user_id = service::create_user(CreateUserDto {
        email: "  Aminata@Example.COM ".into(),
        password: Some("hunter2".into()),
        first_name: "Aminata".into(),
        last_name: "Ngo".into(),
        ..Default::default()
    })
    .await
    .expect("user creation succeeds");

    let user = service::get_by_id(&user_id)
        .await
        .expect("lookup succeeds")
        .expect("user exists");
    assert_eq!(user.email, "Aminata@example.com");
    assert!(user.is_active);
    assert!(!user.is_staff);
    assert!(!user.is_superuser);

    // The stored credential is a hash, never the plaintext
    let hash = repository::get_password_hash(&user_id)
        .await
        .expect("hash lookup succeeds")
        .expect("hash exists");
    assert_ne!(hash, "hunter2");
    assert!(password::verify_password("hunter2", &hash).expect("verification runs"));
    assert!(!password::verify_password("wrong", &hash).expect("verification runs"));

    // Login check: the address is normalized before lookup, the password
    // checked against the stored hash
    let logged_in = service::verify_credentials(" aminata@EXAMPLE.com ", "hunter2")
        .await
        .expect("credential check runs");
    assert!(logged_in.is_none(), "local part is case-sensitive");
    let logged_in = service::verify_credentials(" Aminata@EXAMPLE.com ", "hunter2")
        .await
        .expect("credential check runs")
        .expect("valid credentials resolve the account");
    assert_eq!(logged_in.id, user_id);
    assert!(service::verify_credentials("Aminata@example.com", "wrong")
        .await
        .expect("credential check runs")
        .is_none());
    assert!(service::verify_credentials("nobody@example.com", "hunter2")
        .await
        .expect("credential check runs")
        .is_none());

    // A too-short password is rejected before hashing
    let weak = service::create_user(CreateUserDto {
        email: "weak@example.com".into(),
        password: Some("ab".into()),
        ..Default::default()
    })
    .await;
    assert!(weak.is_err(), "short password must be rejected");

    // The normalized address is what the uniqueness check sees
    let dup = service::create_user(CreateUserDto {
        email: "Aminata@EXAMPLE.com".into(),
        ..Default::default()
    })
    .await;
    assert!(dup.is_err(), "duplicate email must be rejected");

    // Superuser flags: explicit false is an error, unset means true
    let refused = service::create_superuser(CreateUserDto {
        email: "root@heritage.cm".into(),
        is_superuser: Some(false),
        ..Default::default()
    })
    .await;
    assert!(refused.is_err());

    let super_id = service::create_superuser(CreateUserDto {
        email: "root@heritage.cm".into(),
        password: Some("s3cret".into()),
        ..Default::default()
    })
    .await
    .expect("superuser creation succeeds");
    let superuser = service::get_by_id(&super_id)
        .await
        .expect("lookup succeeds")
        .expect("superuser exists");
    assert!(superuser.is_staff);
    assert!(superuser.is_superuser);

    // Reference data for a course
    let group_id = a001_ethnic_group::service::create(EthnicGroupDto {
        id: None,
        name: "Bassa".into(),
        description: "Peuple du Centre et du Littoral".into(),
        history: String::new(),
    })
    .await
    .expect("ethnic group creation succeeds");

    let language_id = a002_language::service::create(LanguageDto {
        id: None,
        name: "Bassa".into(),
        ethnic_group_id: group_id.to_string(),
    })
    .await
    .expect("language creation succeeds");

    // A course without explicit availability is considered running
    let course_id = a007_course::service::create(CourseDto {
        id: None,
        title: "Bassa pour débutants".into(),
        description: "Premiers pas".into(),
        language_id: language_id.to_string(),
        photo_path: None,
        author_id: user_id.clone(),
        theme_ids: vec![],
        availability: None,
    })
    .await
    .expect("course creation succeeds");

    let course = a007_course::service::get_by_id(course_id)
        .await
        .expect("lookup succeeds")
        .expect("course exists");
    assert_eq!(course.availability, CourseAvailability::InProgress);
    assert_eq!(course.author_id, user_id);

    // A course with an unknown author is rejected
    let orphan = a007_course::service::create(CourseDto {
        id: None,
        title: "Sans auteur".into(),
        description: String::new(),
        language_id: language_id.to_string(),
        photo_path: None,
        author_id: uuid::Uuid::new_v4().to_string(),
        theme_ids: vec![],
        availability: None,
    })
    .await;
    assert!(orphan.is_err());

    // Deleting the account removes its courses with it
    let deleted = service::delete(&user_id).await.expect("delete succeeds");
    assert!(deleted);
    assert!(service::get_by_id(&user_id)
        .await
        .expect("lookup succeeds")
        .is_none());
    assert!(a007_course::service::get_by_id(course_id)
        .await
        .expect("lookup succeeds")
        .is_none());

    // Removing the ethnic group leaves the language untouched
    let removed = a001_ethnic_group::service::delete(group_id)
        .await
        .expect("delete succeeds");
    assert!(removed);
    let dangling = a002_language::service::get_by_id(language_id)
        .await
        .expect("lookup succeeds")
        .expect("language still present");
    assert_eq!(dangling.ethnic_group_id.value(), group_id);

    let _ = std::fs::remove_file(&db_file);
}
