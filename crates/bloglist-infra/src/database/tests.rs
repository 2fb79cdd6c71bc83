#[cfg(test)]
mod tests {
    use crate::database::entity::{blog, user};
    use crate::database::postgres_repo::{PostgresBlogRepository, PostgresUserRepository};
    use bloglist_core::domain::{Blog, User};
    use bloglist_core::error::RepoError;
    use bloglist_core::ports::{BaseRepository, UserRepository};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn blog_model(id: uuid::Uuid) -> blog::Model {
        let now = chrono::Utc::now();
        blog::Model {
            id,
            user_id: None,
            title: "React patterns".to_owned(),
            author: Some("Michael Chan".to_owned()),
            url: "https://reactpatterns.com/".to_owned(),
            likes: 7,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_blog_by_id() {
        let blog_id = uuid::Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![blog_model(blog_id)]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let result: Option<Blog> = repo.find_by_id(blog_id).await.unwrap();

        assert!(result.is_some());
        let found = result.unwrap();
        assert_eq!(found.title, "React patterns");
        assert_eq!(found.likes, 7);
        assert_eq!(found.id, blog_id);
    }

    #[tokio::test]
    async fn test_find_user_by_username() {
        let user_id = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user::Model {
                id: user_id,
                username: "mluukkai".to_owned(),
                name: Some("Matti Luukkainen".to_owned()),
                password_hash: "$argon2id$...".to_owned(),
                created_at: now.into(),
                updated_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let result: Option<User> = repo.find_by_username("mluukkai").await.unwrap();

        assert!(result.is_some());
        assert_eq!(result.unwrap().id, user_id);
    }

    #[tokio::test]
    async fn test_delete_missing_blog_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let result =
            BaseRepository::<Blog, _>::delete(&repo, uuid::Uuid::new_v4()).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_find_all_blogs() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                blog_model(uuid::Uuid::new_v4()),
                blog_model(uuid::Uuid::new_v4()),
            ]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let blogs: Vec<Blog> = repo.find_all().await.unwrap();
        assert_eq!(blogs.len(), 2);
    }
}
