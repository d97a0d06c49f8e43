use reqwest::{
    header::{CONTENT_TYPE, USER_AGENT},
    Client as ReqwestClient, StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    api::{self, ImageSearch},
    comment::Comment,
    error::Error,
    filter::Filter,
    forum::{Forum, Post, Topic},
    gallery::Gallery,
    image::Image,
    oembed::Oembed,
    result::Result,
    routes::Route,
    tag::Tag,
    user::User,
};

/// Where requests go unless [`Client::with_base_url`] says otherwise.
const DEFAULT_BASE_URL: &str = "https://derpibooru.org";

const APP_USER_AGENT: &str = concat!("dotbooru/", env!("CARGO_PKG_VERSION"));

/// The entry point for talking to the API.
///
/// A `Client` holds the HTTP connection pool, the base URL of the booru
/// and an optional authentication key. The key is bound once and reused
/// as the `key` query parameter by every method whose endpoint accepts
/// authentication.
#[derive(Debug)]
pub struct Client {
    http: ReqwestClient,
    base_url: String,
    key: Option<String>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Constructs an unauthenticated `Client` against the default
    /// Derpibooru base URL.
    pub fn new() -> Client {
        Client {
            http: ReqwestClient::new(),
            base_url: String::from(DEFAULT_BASE_URL),
            key: None,
        }
    }

    /// Binds an authentication key.
    ///
    /// The key can be found in the account settings of the booru. Every
    /// endpoint that supports authentication will send it from now on.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Client {
        self.key = Some(key.into());
        self
    }

    /// Points the client at another Philomena-based booru.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Client {
        self.base_url = base_url.into();
        self
    }

    /// Returns the base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Performs the HTTP round trip for `route` and returns the decoded
    /// response body.
    ///
    /// The URL must already have its path parameters substituted; `query`
    /// holds only the parameters that are actually present. Anything but
    /// a `200 OK` carrying `application/json; charset=utf-8` is an error.
    async fn dispatch(&self, route: &Route, url: &str, query: &Query) -> Result<Value> {
        debug_assert!(
            query.pairs().iter().all(|(name, _)| route.accepts(name)),
            "query parameter not in the registry entry for {}",
            route.name
        );

        let request = self
            .http
            .request(route.method.clone(), url)
            .header(USER_AGENT, APP_USER_AGENT)
            .query(query.pairs());
        log::info!("request for {url} dispatched");
        let response = request.send().await?;
        log::debug!("response status: {}", response.status());

        validate_status(response.status())?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());
        validate_content_type(content_type)?;

        response.json::<Value>().await.map_err(Into::into)
    }

    /// Fetches `route` and decodes its payload into a single record.
    pub(crate) async fn fetch_object<T>(&self, route: &Route, url: String, query: Query) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = self.dispatch(route, &url, &query).await?;
        decode_object(route, body)
    }

    /// Fetches `route` and decodes its payload into a list of records,
    /// preserving the server's ordering.
    pub(crate) async fn fetch_list<T>(&self, route: &Route, url: String, query: Query) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let body = self.dispatch(route, &url, &query).await?;
        decode_list(route, body)
    }

    /// Fetches the **comment response** for the comment ID referenced by
    /// `comment_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or if the payload does not
    /// decode to a [`Comment`].
    pub async fn comment(&self, comment_id: u64) -> Result<Comment> {
        api::comment(self, comment_id).await
    }

    /// Fetches the **image response** for the image ID referenced by
    /// `image_id`.
    ///
    /// `filter_id` overrides the current filter for this request,
    /// assuming the user can access that filter. This is primarily
    /// useful for unauthenticated API access.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or if the payload does not
    /// decode to an [`Image`].
    pub async fn image(&self, image_id: u64, filter_id: Option<u64>) -> Result<Image> {
        api::image(self, image_id, self.key(), filter_id).await
    }

    /// Fetches the **image response** for the current featured image.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or if the payload does not
    /// decode to an [`Image`].
    pub async fn featured_image(&self) -> Result<Image> {
        api::featured_image(self).await
    }

    /// Fetches the **tag response** for the tag slug given by `tag_id`.
    ///
    /// The tag's numeric ID is **not** used here; to look a tag up by ID,
    /// search with a query like `id:4458` instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or if the payload does not
    /// decode to a [`Tag`].
    pub async fn tag(&self, tag_id: &str) -> Result<Tag> {
        api::tag(self, tag_id).await
    }

    /// Fetches the **post response** for the forum post ID given by
    /// `post_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or if the payload does not
    /// decode to a [`Post`].
    pub async fn post(&self, post_id: u64) -> Result<Post> {
        api::post(self, post_id).await
    }

    /// Fetches the **profile response** for the user ID given by
    /// `user_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or if the payload does not
    /// decode to a [`User`].
    pub async fn user(&self, user_id: u64) -> Result<User> {
        api::user(self, user_id).await
    }

    /// Fetches the **filter response** for the filter ID given by
    /// `filter_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, if the filter is not
    /// accessible with the bound key, or if the payload does not decode
    /// to a [`Filter`].
    pub async fn filter(&self, filter_id: u64) -> Result<Filter> {
        api::filter(self, filter_id, self.key()).await
    }

    /// Fetches the **filter responses** flagged as system filters, which
    /// are usable by anyone.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or if the payload does not
    /// decode to a list of [`Filter`]s.
    pub async fn system_filters(&self, page: Option<u64>) -> Result<Vec<Filter>> {
        api::system_filters(self, page).await
    }

    /// Fetches the **filter responses** belonging to the user the bound
    /// key authenticates.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or if the payload does not
    /// decode to a list of [`Filter`]s. Without a valid key the server
    /// answers `403 Forbidden`, surfaced as
    /// [`UnexpectedStatus`](Error::UnexpectedStatus).
    pub async fn user_filters(&self, page: Option<u64>) -> Result<Vec<Filter>> {
        api::user_filters(self, self.key(), page).await
    }

    /// Fetches the **`oEmbed` response** for the given app link or CDN
    /// URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or if the payload does not
    /// decode to an [`Oembed`].
    pub async fn oembed(&self, url: &str) -> Result<Oembed> {
        api::oembed(self, url).await
    }

    /// Executes the search given by `query` and returns **comment
    /// responses**, sorted by descending creation time.
    ///
    /// The search is case insensitive and stemming is applied, so
    /// searching for *best pony* also turns up *Best Ponies*.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or if the payload does not
    /// decode to a list of [`Comment`]s.
    pub async fn search_comments(&self, query: &str, page: Option<u64>) -> Result<Vec<Comment>> {
        api::search_comments(self, query, self.key(), page).await
    }

    /// Executes the search given by `query` and returns **gallery
    /// responses**, sorted by descending creation time.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or if the payload does not
    /// decode to a list of [`Gallery`] records.
    pub async fn search_galleries(&self, query: &str, page: Option<u64>) -> Result<Vec<Gallery>> {
        api::search_galleries(self, query, self.key(), page).await
    }

    /// Executes the search given by `query` and returns **post
    /// responses**, sorted by descending creation time.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or if the payload does not
    /// decode to a list of [`Post`]s.
    pub async fn search_posts(&self, query: &str, page: Option<u64>) -> Result<Vec<Post>> {
        api::search_posts(self, query, self.key(), page).await
    }

    /// Executes the search given by `query` and returns **image
    /// responses**.
    ///
    /// Sorting, paging and filter overrides travel in `options`; anything
    /// left at `None` is omitted from the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or if the payload does not
    /// decode to a list of [`Image`]s.
    pub async fn search_images(&self, query: &str, options: ImageSearch<'_>) -> Result<Vec<Image>> {
        api::search_images(self, query, self.key(), options).await
    }

    /// Executes the search given by `query` and returns **tag
    /// responses**, sorted by descending image count.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or if the payload does not
    /// decode to a list of [`Tag`]s.
    pub async fn search_tags(&self, query: &str, page: Option<u64>) -> Result<Vec<Tag>> {
        api::search_tags(self, query, page).await
    }

    /// Reverse-searches the image at `url` and returns matching **image
    /// responses**.
    ///
    /// `distance` is the match distance; values between `0.2` and `0.5`
    /// work well.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or if the payload does not
    /// decode to a list of [`Image`]s.
    pub async fn search_reverse(&self, url: &str, distance: f64) -> Result<Vec<Image>> {
        api::search_reverse(self, url, distance, self.key()).await
    }

    /// Fetches the list of **forum responses**.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or if the payload does not
    /// decode to a list of [`Forum`]s.
    pub async fn forums(&self) -> Result<Vec<Forum>> {
        api::forums(self).await
    }

    /// Fetches the **forum response** for the abbreviated name given by
    /// `short_name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or if the payload does not
    /// decode to a [`Forum`].
    pub async fn forum(&self, short_name: &str) -> Result<Forum> {
        api::forum(self, short_name).await
    }

    /// Fetches the **topic responses** of the forum given by
    /// `short_name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or if the payload does not
    /// decode to a list of [`Topic`]s.
    pub async fn forum_topics(&self, short_name: &str, page: Option<u64>) -> Result<Vec<Topic>> {
        api::forum_topics(self, short_name, page).await
    }

    /// Fetches the **topic response** for `topic_slug` within the forum
    /// given by `short_name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or if the payload does not
    /// decode to a [`Topic`].
    pub async fn forum_topic(&self, short_name: &str, topic_slug: &str) -> Result<Topic> {
        api::forum_topic(self, short_name, topic_slug).await
    }

    /// Fetches the **post responses** of the topic given by `short_name`
    /// and `topic_slug`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or if the payload does not
    /// decode to a list of [`Post`]s.
    pub async fn forum_posts(
        &self,
        short_name: &str,
        topic_slug: &str,
        page: Option<u64>,
    ) -> Result<Vec<Post>> {
        api::forum_posts(self, short_name, topic_slug, page).await
    }

    /// Fetches the **post response** for the post given by `short_name`,
    /// `topic_slug` and `post_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or if the payload does not
    /// decode to a [`Post`].
    pub async fn forum_post(
        &self,
        short_name: &str,
        topic_slug: &str,
        post_id: u64,
    ) -> Result<Post> {
        api::forum_post(self, short_name, topic_slug, post_id).await
    }
}

/// Outgoing query parameters.
///
/// Optional parameters that are absent are never pushed, so they never
/// appear in the request, not even as an empty value.
#[derive(Debug, Default)]
pub(crate) struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub(crate) fn new() -> Query {
        Query::default()
    }

    pub(crate) fn push<T: ToString>(&mut self, name: &'static str, value: T) {
        self.pairs.push((name, value.to_string()));
    }

    pub(crate) fn push_opt<T: ToString>(&mut self, name: &'static str, value: Option<T>) {
        if let Some(value) = value {
            self.push(name, value);
        }
    }

    pub(crate) fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}

fn validate_status(status: StatusCode) -> Result<()> {
    if status == StatusCode::OK {
        Ok(())
    } else {
        Err(Error::UnexpectedStatus(status))
    }
}

fn validate_content_type(value: Option<&str>) -> Result<()> {
    match value {
        Some(value) if value.eq_ignore_ascii_case("application/json; charset=utf-8") => Ok(()),
        other => Err(Error::UnexpectedContentType(other.map(str::to_owned))),
    }
}

/// Pulls the payload out of the response envelope, or hands the body
/// back untouched for routes without one.
fn take_payload(route: &Route, mut body: Value) -> Result<Value> {
    match route.envelope {
        None => Ok(body),
        Some(key) => body
            .get_mut(key)
            .map(Value::take)
            .ok_or(Error::MissingEnvelope(key)),
    }
}

fn decode_object<T: DeserializeOwned>(route: &Route, body: Value) -> Result<T> {
    let payload = take_payload(route, body)?;
    if !payload.is_object() {
        return Err(Error::UnexpectedShape {
            expected: "an object",
            found: json_kind(&payload),
        });
    }
    serde_json::from_value(payload).map_err(Into::into)
}

fn decode_list<T: DeserializeOwned>(route: &Route, body: Value) -> Result<Vec<T>> {
    let payload = take_payload(route, body)?;
    if !payload.is_array() {
        return Err(Error::UnexpectedShape {
            expected: "an array",
            found: json_kind(&payload),
        });
    }
    serde_json::from_value(payload).map_err(Into::into)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
