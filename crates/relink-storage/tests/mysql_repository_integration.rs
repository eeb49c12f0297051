use relink_core::ShortCode;
use relink_storage::{MySqlRepository, ReadRepository, Repository, StorageError, UrlRecord};
use relink_test_infra::mysql::{MySqlServer, MysqlConfig};

struct Fixture {
    _mysql: MySqlServer,
    repo: MySqlRepository,
}

impl Fixture {
    async fn start() -> Self {
        let mysql = MySqlServer::new(MysqlConfig::builder().build())
            .await
            .expect("start mysql");
        let pool = mysql.connect().await.expect("connect mysql");

        let repo = MySqlRepository::new(pool);
        repo.ensure_schema().await.expect("create schema");

        Self {
            _mysql: mysql,
            repo,
        }
    }
}

fn code(value: &str) -> ShortCode {
    ShortCode::new_unchecked(value)
}

#[tokio::test]
#[ignore = "requires docker"]
async fn insert_and_get_record() {
    let fixture = Fixture::start().await;
    let short_code = code("abc123");

    fixture
        .repo
        .insert(&short_code, UrlRecord::new("https://example.com"))
        .await
        .unwrap();

    let got = fixture.repo.get(&short_code).await.unwrap().unwrap();
    assert_eq!(got.original_url, "https://example.com");
    assert!(fixture.repo.exists(&short_code).await.unwrap());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn insert_conflicts_when_code_already_exists() {
    let fixture = Fixture::start().await;
    let short_code = code("abc123");

    fixture
        .repo
        .insert(&short_code, UrlRecord::new("https://one.example"))
        .await
        .unwrap();

    let err = fixture
        .repo
        .insert(&short_code, UrlRecord::new("https://two.example"))
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::CodeTaken(_)));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn insert_conflicts_when_url_already_has_a_code() {
    let fixture = Fixture::start().await;

    fixture
        .repo
        .insert(&code("first1"), UrlRecord::new("https://one.example"))
        .await
        .unwrap();

    let err = fixture
        .repo
        .insert(&code("second"), UrlRecord::new("https://one.example"))
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::UrlTaken(_)));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn finds_codes_by_url() {
    let fixture = Fixture::start().await;

    fixture
        .repo
        .insert(&code("aaa111"), UrlRecord::new("https://a.example/x?y=1&z=2"))
        .await
        .unwrap();
    fixture
        .repo
        .insert(&code("bbb222"), UrlRecord::new("https://b.example"))
        .await
        .unwrap();

    assert_eq!(
        fixture
            .repo
            .find_by_url("https://a.example/x?y=1&z=2")
            .await
            .unwrap(),
        Some(code("aaa111"))
    );

    let found = fixture
        .repo
        .find_many_by_url(&[
            "https://a.example/x?y=1&z=2".to_string(),
            "https://b.example".to_string(),
            "https://missing.example".to_string(),
        ])
        .await
        .unwrap();

    assert_eq!(found.len(), 2);
    assert_eq!(found["https://b.example"], code("bbb222"));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn short_codes_are_case_sensitive() {
    let fixture = Fixture::start().await;

    fixture
        .repo
        .insert(&code("AbCdEf"), UrlRecord::new("https://upper.example"))
        .await
        .unwrap();
    fixture
        .repo
        .insert(&code("abcdef"), UrlRecord::new("https://lower.example"))
        .await
        .unwrap();

    let got = fixture.repo.get(&code("abcdef")).await.unwrap().unwrap();
    assert_eq!(got.original_url, "https://lower.example");
}
