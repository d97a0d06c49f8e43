//! One function per API route.
//!
//! Every function substitutes its path parameters through the route's
//! registry entry, collects the query parameters it was given (optionals
//! that are `None` are omitted outright) and hands the request to the
//! [`Client`] dispatcher. Endpoints that accept authentication take the
//! key explicitly here; the [`Client`] methods pass their bound key in.

use crate::{
    client::Query,
    comment::Comment,
    filter::Filter,
    forum::{Forum, Post, Topic},
    gallery::Gallery,
    image::Image,
    oembed::Oembed,
    result::Result,
    routes,
    tag::Tag,
    user::User,
    Client,
};

/// Optional parameters accepted by [`search_images`].
///
/// Everything defaults to `None`, which leaves the corresponding query
/// parameter out of the request and lets the server apply its defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageSearch<'a> {
    /// Overrides the current filter for this request, assuming the user
    /// can access the filter ID given. Primarily useful for
    /// unauthenticated API access.
    pub filter_id: Option<u64>,
    /// Page of the paginated response. The first page is `1`.
    pub page: Option<u64>,
    /// Results per page, up to a limit of 50. The server default is 25.
    pub per_page: Option<u64>,
    /// Sort direction, sent as `sd` on the wire.
    pub sort_direction: Option<&'a str>,
    /// Sort field, sent as `sf` on the wire.
    pub sort_field: Option<&'a str>,
}

/// Fetches the **comment response** for the comment ID referenced by
/// `comment_id`, from `/api/v1/json/comments/:comment_id`.
///
/// # Errors
///
/// Returns an error if the request fails or if the payload does not
/// decode to a [`Comment`].
pub async fn comment(client: &Client, comment_id: u64) -> Result<Comment> {
    let id = comment_id.to_string();
    let url = routes::COMMENT.url(client.base_url(), &[&id]);
    client.fetch_object(&routes::COMMENT, url, Query::new()).await
}

/// Fetches the **image response** for the image ID referenced by
/// `image_id`, from `/api/v1/json/images/:image_id`.
///
/// # Errors
///
/// Returns an error if the request fails or if the payload does not
/// decode to an [`Image`].
pub async fn image(
    client: &Client,
    image_id: u64,
    key: Option<&str>,
    filter_id: Option<u64>,
) -> Result<Image> {
    let id = image_id.to_string();
    let url = routes::IMAGE.url(client.base_url(), &[&id]);
    let mut params = Query::new();
    params.push_opt("key", key);
    params.push_opt("filter_id", filter_id);
    client.fetch_object(&routes::IMAGE, url, params).await
}

/// Fetches the **image response** for the current featured image, from
/// `/api/v1/json/images/featured`.
///
/// # Errors
///
/// Returns an error if the request fails or if the payload does not
/// decode to an [`Image`].
pub async fn featured_image(client: &Client) -> Result<Image> {
    let url = routes::FEATURED_IMAGE.url(client.base_url(), &[]);
    client
        .fetch_object(&routes::FEATURED_IMAGE, url, Query::new())
        .await
}

/// Fetches the **tag response** for the tag slug given by `tag_id`, from
/// `/api/v1/json/tags/:tag_id`.
///
/// The tag's numeric ID is **not** used; for getting a tag by ID, search
/// with a query like `id:4458` instead.
///
/// # Errors
///
/// Returns an error if the request fails or if the payload does not
/// decode to a [`Tag`].
pub async fn tag(client: &Client, tag_id: &str) -> Result<Tag> {
    let url = routes::TAG.url(client.base_url(), &[tag_id]);
    client.fetch_object(&routes::TAG, url, Query::new()).await
}

/// Fetches the **post response** for the forum post ID given by
/// `post_id`, from `/api/v1/json/posts/:post_id`.
///
/// # Errors
///
/// Returns an error if the request fails or if the payload does not
/// decode to a [`Post`].
pub async fn post(client: &Client, post_id: u64) -> Result<Post> {
    let id = post_id.to_string();
    let url = routes::POST.url(client.base_url(), &[&id]);
    client.fetch_object(&routes::POST, url, Query::new()).await
}

/// Fetches the **profile response** for the user ID given by `user_id`,
/// from `/api/v1/json/profiles/:user_id`.
///
/// # Errors
///
/// Returns an error if the request fails or if the payload does not
/// decode to a [`User`].
pub async fn user(client: &Client, user_id: u64) -> Result<User> {
    let id = user_id.to_string();
    let url = routes::USER.url(client.base_url(), &[&id]);
    client.fetch_object(&routes::USER, url, Query::new()).await
}

/// Fetches the **filter response** for the filter ID given by
/// `filter_id`, from `/api/v1/json/filters/:filter_id`.
///
/// # Errors
///
/// Returns an error if the request fails or if the payload does not
/// decode to a [`Filter`].
pub async fn filter(client: &Client, filter_id: u64, key: Option<&str>) -> Result<Filter> {
    let id = filter_id.to_string();
    let url = routes::FILTER.url(client.base_url(), &[&id]);
    let mut params = Query::new();
    params.push_opt("key", key);
    client.fetch_object(&routes::FILTER, url, params).await
}

/// Fetches the **filter responses** flagged as system filters, from
/// `/api/v1/json/filters/system`. System filters are usable by anyone.
///
/// # Errors
///
/// Returns an error if the request fails or if the payload does not
/// decode to a list of [`Filter`]s.
pub async fn system_filters(client: &Client, page: Option<u64>) -> Result<Vec<Filter>> {
    let url = routes::SYSTEM_FILTERS.url(client.base_url(), &[]);
    let mut params = Query::new();
    params.push_opt("page", page);
    client.fetch_list(&routes::SYSTEM_FILTERS, url, params).await
}

/// Fetches the **filter responses** belonging to the user given by
/// `key`, from `/api/v1/json/filters/user`.
///
/// # Errors
///
/// Returns an error if the request fails or if the payload does not
/// decode to a list of [`Filter`]s. With no key, or an invalid one, the
/// server answers `403 Forbidden`.
pub async fn user_filters(
    client: &Client,
    key: Option<&str>,
    page: Option<u64>,
) -> Result<Vec<Filter>> {
    let url = routes::USER_FILTERS.url(client.base_url(), &[]);
    let mut params = Query::new();
    params.push_opt("key", key);
    params.push_opt("page", page);
    client.fetch_list(&routes::USER_FILTERS, url, params).await
}

/// Fetches the **`oEmbed` response** for the given app link or CDN URL,
/// from `/api/v1/json/oembed`.
///
/// This is the one route whose payload is the response body itself
/// rather than an envelope key.
///
/// # Errors
///
/// Returns an error if the request fails or if the payload does not
/// decode to an [`Oembed`].
pub async fn oembed(client: &Client, url: &str) -> Result<Oembed> {
    let target = routes::OEMBED.url(client.base_url(), &[]);
    let mut params = Query::new();
    params.push("url", url);
    client.fetch_object(&routes::OEMBED, target, params).await
}

/// Executes the search given by `query` against
/// `/api/v1/json/search/comments` and returns **comment responses**,
/// sorted by descending creation time.
///
/// # Errors
///
/// Returns an error if the request fails or if the payload does not
/// decode to a list of [`Comment`]s.
pub async fn search_comments(
    client: &Client,
    query: &str,
    key: Option<&str>,
    page: Option<u64>,
) -> Result<Vec<Comment>> {
    let url = routes::SEARCH_COMMENTS.url(client.base_url(), &[]);
    let mut params = Query::new();
    params.push("q", query);
    params.push_opt("key", key);
    params.push_opt("page", page);
    client.fetch_list(&routes::SEARCH_COMMENTS, url, params).await
}

/// Executes the search given by `query` against
/// `/api/v1/json/search/galleries` and returns **gallery responses**,
/// sorted by descending creation time.
///
/// # Errors
///
/// Returns an error if the request fails or if the payload does not
/// decode to a list of [`Gallery`] records.
pub async fn search_galleries(
    client: &Client,
    query: &str,
    key: Option<&str>,
    page: Option<u64>,
) -> Result<Vec<Gallery>> {
    let url = routes::SEARCH_GALLERIES.url(client.base_url(), &[]);
    let mut params = Query::new();
    params.push("q", query);
    params.push_opt("key", key);
    params.push_opt("page", page);
    client.fetch_list(&routes::SEARCH_GALLERIES, url, params).await
}

/// Executes the search given by `query` against
/// `/api/v1/json/search/posts` and returns **post responses**, sorted by
/// descending creation time.
///
/// # Errors
///
/// Returns an error if the request fails or if the payload does not
/// decode to a list of [`Post`]s.
pub async fn search_posts(
    client: &Client,
    query: &str,
    key: Option<&str>,
    page: Option<u64>,
) -> Result<Vec<Post>> {
    let url = routes::SEARCH_POSTS.url(client.base_url(), &[]);
    let mut params = Query::new();
    params.push("q", query);
    params.push_opt("key", key);
    params.push_opt("page", page);
    client.fetch_list(&routes::SEARCH_POSTS, url, params).await
}

/// Executes the search given by `query` against
/// `/api/v1/json/search/images` and returns **image responses**.
///
/// # Errors
///
/// Returns an error if the request fails or if the payload does not
/// decode to a list of [`Image`]s.
pub async fn search_images(
    client: &Client,
    query: &str,
    key: Option<&str>,
    options: ImageSearch<'_>,
) -> Result<Vec<Image>> {
    let url = routes::SEARCH_IMAGES.url(client.base_url(), &[]);
    let mut params = Query::new();
    params.push("q", query);
    params.push_opt("key", key);
    params.push_opt("filter_id", options.filter_id);
    params.push_opt("page", options.page);
    params.push_opt("per_page", options.per_page);
    params.push_opt("sd", options.sort_direction);
    params.push_opt("sf", options.sort_field);
    client.fetch_list(&routes::SEARCH_IMAGES, url, params).await
}

/// Executes the search given by `query` against
/// `/api/v1/json/search/tags` and returns **tag responses**, sorted by
/// descending image count.
///
/// # Errors
///
/// Returns an error if the request fails or if the payload does not
/// decode to a list of [`Tag`]s.
pub async fn search_tags(client: &Client, query: &str, page: Option<u64>) -> Result<Vec<Tag>> {
    let url = routes::SEARCH_TAGS.url(client.base_url(), &[]);
    let mut params = Query::new();
    params.push("q", query);
    params.push_opt("page", page);
    client.fetch_list(&routes::SEARCH_TAGS, url, params).await
}

/// Reverse-searches the image given by the `url` query parameter with a
/// `POST` to `/api/v1/json/search/reverse` and returns matching **image
/// responses**.
///
/// `distance` is the match distance; suggested values lie between `0.2`
/// and `0.5`.
///
/// # Errors
///
/// Returns an error if the request fails or if the payload does not
/// decode to a list of [`Image`]s.
pub async fn search_reverse(
    client: &Client,
    url: &str,
    distance: f64,
    key: Option<&str>,
) -> Result<Vec<Image>> {
    let target = routes::SEARCH_REVERSE.url(client.base_url(), &[]);
    let mut params = Query::new();
    params.push("url", url);
    params.push("distance", distance);
    params.push_opt("key", key);
    client.fetch_list(&routes::SEARCH_REVERSE, target, params).await
}

/// Fetches the list of **forum responses** from `/api/v1/json/forums`.
///
/// # Errors
///
/// Returns an error if the request fails or if the payload does not
/// decode to a list of [`Forum`]s.
pub async fn forums(client: &Client) -> Result<Vec<Forum>> {
    let url = routes::FORUMS.url(client.base_url(), &[]);
    client.fetch_list(&routes::FORUMS, url, Query::new()).await
}

/// Fetches the **forum response** for the abbreviated name given by
/// `short_name`, from `/api/v1/json/forums/:short_name`.
///
/// # Errors
///
/// Returns an error if the request fails or if the payload does not
/// decode to a [`Forum`].
pub async fn forum(client: &Client, short_name: &str) -> Result<Forum> {
    let url = routes::FORUM.url(client.base_url(), &[short_name]);
    client.fetch_object(&routes::FORUM, url, Query::new()).await
}

/// Fetches the **topic responses** of the forum given by `short_name`,
/// from `/api/v1/json/forums/:short_name/topics`.
///
/// # Errors
///
/// Returns an error if the request fails or if the payload does not
/// decode to a list of [`Topic`]s.
pub async fn forum_topics(
    client: &Client,
    short_name: &str,
    page: Option<u64>,
) -> Result<Vec<Topic>> {
    let url = routes::FORUM_TOPICS.url(client.base_url(), &[short_name]);
    let mut params = Query::new();
    params.push_opt("page", page);
    client.fetch_list(&routes::FORUM_TOPICS, url, params).await
}

/// Fetches the **topic response** for `topic_slug` within the forum
/// given by `short_name`, from
/// `/api/v1/json/forums/:short_name/topics/:topic_slug`.
///
/// # Errors
///
/// Returns an error if the request fails or if the payload does not
/// decode to a [`Topic`].
pub async fn forum_topic(client: &Client, short_name: &str, topic_slug: &str) -> Result<Topic> {
    let url = routes::FORUM_TOPIC.url(client.base_url(), &[short_name, topic_slug]);
    client
        .fetch_object(&routes::FORUM_TOPIC, url, Query::new())
        .await
}

/// Fetches the **post responses** of the topic given by `short_name` and
/// `topic_slug`, from
/// `/api/v1/json/forums/:short_name/topics/:topic_slug/posts`.
///
/// # Errors
///
/// Returns an error if the request fails or if the payload does not
/// decode to a list of [`Post`]s.
pub async fn forum_posts(
    client: &Client,
    short_name: &str,
    topic_slug: &str,
    page: Option<u64>,
) -> Result<Vec<Post>> {
    let url = routes::FORUM_POSTS.url(client.base_url(), &[short_name, topic_slug]);
    let mut params = Query::new();
    params.push_opt("page", page);
    client.fetch_list(&routes::FORUM_POSTS, url, params).await
}

/// Fetches the **post response** for the post given by `short_name`,
/// `topic_slug` and `post_id`, from
/// `/api/v1/json/forums/:short_name/topics/:topic_slug/posts/:post_id`.
///
/// # Errors
///
/// Returns an error if the request fails or if the payload does not
/// decode to a [`Post`].
pub async fn forum_post(
    client: &Client,
    short_name: &str,
    topic_slug: &str,
    post_id: u64,
) -> Result<Post> {
    let id = post_id.to_string();
    let url = routes::FORUM_POST.url(client.base_url(), &[short_name, topic_slug, &id]);
    client
        .fetch_object(&routes::FORUM_POST, url, Query::new())
        .await
}
