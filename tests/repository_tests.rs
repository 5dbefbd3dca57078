//! Repository tests against a temporary SQLite file

mod common;

use bookshelf_server::{
    error::AppError,
    models::book::BookInput,
    repository::{ensure_schema, BookStore, BooksRepository},
};

fn dom_casmurro() -> BookInput {
    BookInput::new("Dom Casmurro", "Machado de Assis", 1899, true)
}

#[tokio::test]
async fn test_insert_then_get_roundtrip() {
    let (_dir, pool) = common::test_pool().await;
    let repo = BooksRepository::new(pool);

    let id = repo.insert(&dom_casmurro()).await.unwrap();
    assert_eq!(id, 1);

    let book = repo.get_by_id(id).await.unwrap();
    assert_eq!(book.id, 1);
    assert_eq!(book.title, "Dom Casmurro");
    assert_eq!(book.author, "Machado de Assis");
    assert_eq!(book.publication_year, 1899);
    assert!(book.available);
}

#[tokio::test]
async fn test_text_is_stored_verbatim() {
    let (_dir, pool) = common::test_pool().await;
    let repo = BooksRepository::new(pool);

    let id = repo
        .insert(&BookInput::new("  Helena ", "Machado", -12, false))
        .await
        .unwrap();
    let book = repo.get_by_id(id).await.unwrap();
    assert_eq!(book.title, "  Helena ");
    assert_eq!(book.publication_year, -12);
    assert!(!book.available);
}

#[tokio::test]
async fn test_missing_ids_are_not_found() {
    let (_dir, pool) = common::test_pool().await;
    let repo = BooksRepository::new(pool);

    assert!(matches!(repo.get_by_id(7).await, Err(AppError::NotFound(7))));
    assert!(matches!(
        repo.update(7, &dom_casmurro()).await,
        Err(AppError::NotFound(7))
    ));
    assert!(matches!(repo.delete(7).await, Err(AppError::NotFound(7))));
}

#[tokio::test]
async fn test_delete_on_empty_store_leaves_it_empty() {
    let (_dir, pool) = common::test_pool().await;
    let repo = BooksRepository::new(pool);

    assert!(matches!(repo.delete(999).await, Err(AppError::NotFound(999))));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_get_after_delete_is_not_found() {
    let (_dir, pool) = common::test_pool().await;
    let repo = BooksRepository::new(pool);

    let id = repo.insert(&dom_casmurro()).await.unwrap();
    repo.delete(id).await.unwrap();

    assert!(matches!(repo.get_by_id(id).await, Err(AppError::NotFound(_))));
    assert!(matches!(repo.delete(id).await, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_update_replaces_every_field() {
    let (_dir, pool) = common::test_pool().await;
    let repo = BooksRepository::new(pool);

    let id = repo.insert(&dom_casmurro()).await.unwrap();
    let replacement = BookInput::new("Quincas Borba", "M. de Assis", 1891, false);
    repo.update(id, &replacement).await.unwrap();

    let book = repo.get_by_id(id).await.unwrap();
    assert_eq!(book.title, "Quincas Borba");
    assert_eq!(book.author, "M. de Assis");
    assert_eq!(book.publication_year, 1891);
    assert!(!book.available);
}

#[tokio::test]
async fn test_update_title_keeps_resubmitted_fields() {
    let (_dir, pool) = common::test_pool().await;
    let repo = BooksRepository::new(pool);

    let id = repo.insert(&dom_casmurro()).await.unwrap();
    let second_edition = BookInput::new("Dom Casmurro (2nd ed.)", "Machado de Assis", 1899, true);
    repo.update(id, &second_edition).await.unwrap();

    let book = repo.get_by_id(id).await.unwrap();
    assert_eq!(book.title, "Dom Casmurro (2nd ed.)");
    assert_eq!(book.author, "Machado de Assis");
    assert_eq!(book.publication_year, 1899);
    assert!(book.available);
}

#[tokio::test]
async fn test_list_after_delete() {
    let (_dir, pool) = common::test_pool().await;
    let repo = BooksRepository::new(pool);

    let mut ids = Vec::new();
    for i in 0..5 {
        let input = BookInput::new(format!("Book {i}"), "Author", 1900 + i, i % 2 == 0);
        ids.push(repo.insert(&input).await.unwrap());
    }
    repo.delete(ids[2]).await.unwrap();

    let books = repo.list_all().await.unwrap();
    assert_eq!(books.len(), 4);
    assert!(books.iter().all(|b| b.id != ids[2]));

    let listed: Vec<i64> = books.iter().map(|b| b.id).collect();
    let mut sorted = listed.clone();
    sorted.sort();
    assert_eq!(listed, sorted);
}

#[tokio::test]
async fn test_ids_are_not_reused() {
    let (_dir, pool) = common::test_pool().await;
    let repo = BooksRepository::new(pool);

    let first = repo.insert(&dom_casmurro()).await.unwrap();
    repo.delete(first).await.unwrap();
    let second = repo.insert(&dom_casmurro()).await.unwrap();
    assert!(second > first);
}

#[tokio::test]
async fn test_blank_fields_are_rejected_without_writing() {
    let (_dir, pool) = common::test_pool().await;
    let repo = BooksRepository::new(pool);

    let no_title = BookInput::new("", "Machado de Assis", 1899, true);
    let no_author = BookInput::new("Dom Casmurro", "   ", 1899, true);

    assert!(matches!(repo.insert(&no_title).await, Err(AppError::Validation(_))));
    assert!(matches!(repo.insert(&no_author).await, Err(AppError::Validation(_))));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_invalid_update_leaves_row_untouched() {
    let (_dir, pool) = common::test_pool().await;
    let repo = BooksRepository::new(pool);

    let id = repo.insert(&dom_casmurro()).await.unwrap();
    let blank = BookInput::new("", "", 2000, false);
    assert!(matches!(repo.update(id, &blank).await, Err(AppError::Validation(_))));

    let book = repo.get_by_id(id).await.unwrap();
    assert_eq!(book.title, "Dom Casmurro");
}

#[tokio::test]
async fn test_ensure_schema_is_idempotent() {
    let (_dir, pool) = common::test_pool().await;
    let repo = BooksRepository::new(pool.clone());
    repo.insert(&dom_casmurro()).await.unwrap();

    ensure_schema(&pool).await.unwrap();
    ensure_schema(&pool).await.unwrap();

    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_closed_pool_is_an_infrastructure_error() {
    let (_dir, pool) = common::test_pool().await;
    let repo = BooksRepository::new(pool.clone());
    pool.close().await;

    assert!(matches!(repo.list_all().await, Err(AppError::Database(_))));
}
