// SPDX-License-Identifier: MPL-2.0
//! `reqwest` adapter for the library API.
//!
//! Endpoints are relative to the configured base URL: `GET /books` returns the
//! catalogue and `GET /me` the signed-in reader.

use crate::application::port::{FetchError, FetchFuture, LibraryRepository};
use crate::domain::{Author, Book, User};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

const USER_AGENT: &str = concat!("Bookshelf/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Wire types
// =============================================================================

#[derive(Debug, Deserialize)]
struct AuthorDto {
    name: String,
}

#[derive(Debug, Deserialize)]
struct BookDto {
    id: u64,
    title: String,
    author: AuthorDto,
}

impl From<BookDto> for Book {
    fn from(dto: BookDto) -> Self {
        Book {
            id: dto.id,
            title: dto.title,
            author: Author {
                name: dto.author.name,
            },
        }
    }
}

/// The API spells the first-name field `fistName`.
#[derive(Debug, Deserialize)]
struct UserDto {
    email: String,
    #[serde(rename = "fistName", alias = "firstName", default)]
    first_name: String,
    #[serde(rename = "lastName", default)]
    last_name: String,
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        User {
            email: dto.email,
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}

// =============================================================================
// HttpLibrary
// =============================================================================

/// HTTP implementation of [`LibraryRepository`].
#[derive(Debug, Clone)]
pub struct HttpLibrary {
    client: reqwest::Client,
    base_url: String,
}

impl HttpLibrary {
    /// Builds a client for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] if the TLS backend cannot be initialized.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get<T>(&self, path: &'static str) -> FetchFuture<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let client = self.client.clone();
        let url = format!("{}{path}", self.base_url);

        Box::pin(async move {
            log::debug!("GET {url}");
            let response = client.get(&url).send().await.map_err(classify)?;

            let status = response.status();
            let bytes = response.bytes().await.map_err(classify)?;

            if !status.is_success() {
                return Err(FetchError::Status {
                    status: status.as_u16(),
                    body: serde_json::from_slice(&bytes).ok(),
                });
            }

            serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))
        })
    }
}

impl LibraryRepository for HttpLibrary {
    fn books(&self) -> FetchFuture<Vec<Book>> {
        let request = self.get::<Vec<BookDto>>("/books");
        Box::pin(async move { Ok(request.await?.into_iter().map(Book::from).collect()) })
    }

    fn me(&self) -> FetchFuture<User> {
        let request = self.get::<UserDto>("/me");
        Box::pin(async move { request.await.map(User::from) })
    }
}

fn classify(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else if err.is_decode() {
        FetchError::Decode(err.to_string())
    } else {
        FetchError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_drops_trailing_slash() {
        let library = HttpLibrary::new("http://localhost:4000/", Duration::from_secs(5))
            .expect("client builds");
        assert_eq!(library.base_url(), "http://localhost:4000");
    }

    #[test]
    fn user_dto_reads_api_spelling() {
        let dto: UserDto = serde_json::from_str(
            r#"{"email":"jane@example.com","fistName":"Jane","lastName":"Doe"}"#,
        )
        .expect("valid user json");
        let user = User::from(dto);
        assert_eq!(user.first_name, "Jane");
        assert_eq!(user.last_name, "Doe");
    }

    #[test]
    fn book_dto_maps_nested_author() {
        let dto: BookDto =
            serde_json::from_str(r#"{"id":1,"title":"Dune","author":{"name":"Frank Herbert"}}"#)
                .expect("valid book json");
        let book = Book::from(dto);
        assert_eq!(book.author.name, "Frank Herbert");
        assert_eq!(book.id, 1);
    }
}
