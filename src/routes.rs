//! The declarative route registry.
//!
//! Every endpoint the library knows about is described here as a [`Route`]:
//! its HTTP method, its path template, the query parameters it accepts and
//! the envelope key its payload hides under. The endpoint functions in
//! [`crate::api`] are thin compositions of a `Route` with the dispatch
//! logic in [`crate::client`]; nothing about a route is decided anywhere
//! else.

use reqwest::Method;

/// A single endpoint definition.
///
/// Path templates use `:name` placeholders, exactly as the API documents
/// them. Query parameter names are the wire names (`q`, `sd`, `sf`, ...),
/// matched bit-for-bit.
#[derive(Debug)]
pub struct Route {
    /// Identifier of the route, matching its endpoint function.
    pub name: &'static str,
    /// HTTP method the route is called with.
    pub method: Method,
    /// URL path template with `:name` placeholders.
    pub path: &'static str,
    /// Query parameter names the endpoint accepts.
    pub query: &'static [&'static str],
    /// Envelope key the payload sits under, or `None` if the response body
    /// is the payload itself.
    pub envelope: Option<&'static str>,
}

impl Route {
    /// Substitutes `args` into the `:name` placeholders of the path
    /// template, in order, and returns the full request URL.
    ///
    /// A trailing slash on `base` is tolerated. The number of arguments
    /// must match the number of placeholders; the endpoint functions
    /// guarantee this statically.
    pub fn url(&self, base: &str, args: &[&str]) -> String {
        let mut args = args.iter();
        let mut url = String::from(base.trim_end_matches('/'));
        for segment in self.path.split('/').skip(1) {
            url.push('/');
            if let Some(name) = segment.strip_prefix(':') {
                let value = args.next();
                debug_assert!(value.is_some(), "no value for :{name} of {}", self.name);
                if let Some(value) = value {
                    url.push_str(value);
                }
            } else {
                url.push_str(segment);
            }
        }
        debug_assert!(args.next().is_none(), "too many arguments for {}", self.name);
        url
    }

    /// Returns true if `name` is a query parameter this route accepts.
    pub fn accepts(&self, name: &str) -> bool {
        self.query.contains(&name)
    }
}

/// `GET /api/v1/json/comments/:comment_id` -> `{"comment": Comment}`
pub const COMMENT: Route = Route {
    name: "comment",
    method: Method::GET,
    path: "/api/v1/json/comments/:comment_id",
    query: &[],
    envelope: Some("comment"),
};

/// `GET /api/v1/json/images/:image_id` -> `{"image": Image}`
pub const IMAGE: Route = Route {
    name: "image",
    method: Method::GET,
    path: "/api/v1/json/images/:image_id",
    query: &["key", "filter_id"],
    envelope: Some("image"),
};

/// `GET /api/v1/json/images/featured` -> `{"image": Image}`
pub const FEATURED_IMAGE: Route = Route {
    name: "featured_image",
    method: Method::GET,
    path: "/api/v1/json/images/featured",
    query: &[],
    envelope: Some("image"),
};

/// `GET /api/v1/json/tags/:tag_id` -> `{"tag": Tag}`
///
/// `:tag_id` is the tag slug, not its numeric ID.
pub const TAG: Route = Route {
    name: "tag",
    method: Method::GET,
    path: "/api/v1/json/tags/:tag_id",
    query: &[],
    envelope: Some("tag"),
};

/// `GET /api/v1/json/posts/:post_id` -> `{"post": Post}`
pub const POST: Route = Route {
    name: "post",
    method: Method::GET,
    path: "/api/v1/json/posts/:post_id",
    query: &[],
    envelope: Some("post"),
};

/// `GET /api/v1/json/profiles/:user_id` -> `{"user": User}`
pub const USER: Route = Route {
    name: "user",
    method: Method::GET,
    path: "/api/v1/json/profiles/:user_id",
    query: &[],
    envelope: Some("user"),
};

/// `GET /api/v1/json/filters/:filter_id` -> `{"filter": Filter}`
pub const FILTER: Route = Route {
    name: "filter",
    method: Method::GET,
    path: "/api/v1/json/filters/:filter_id",
    query: &["key"],
    envelope: Some("filter"),
};

/// `GET /api/v1/json/filters/system` -> `{"filters": [Filter]}`
pub const SYSTEM_FILTERS: Route = Route {
    name: "system_filters",
    method: Method::GET,
    path: "/api/v1/json/filters/system",
    query: &["page"],
    envelope: Some("filters"),
};

/// `GET /api/v1/json/filters/user` -> `{"filters": [Filter]}`
pub const USER_FILTERS: Route = Route {
    name: "user_filters",
    method: Method::GET,
    path: "/api/v1/json/filters/user",
    query: &["key", "page"],
    envelope: Some("filters"),
};

/// `GET /api/v1/json/oembed` -> `Oembed`
///
/// The only route whose payload is the response body itself.
pub const OEMBED: Route = Route {
    name: "oembed",
    method: Method::GET,
    path: "/api/v1/json/oembed",
    query: &["url"],
    envelope: None,
};

/// `GET /api/v1/json/search/comments` -> `{"comments": [Comment]}`
pub const SEARCH_COMMENTS: Route = Route {
    name: "search_comments",
    method: Method::GET,
    path: "/api/v1/json/search/comments",
    query: &["q", "key", "page"],
    envelope: Some("comments"),
};

/// `GET /api/v1/json/search/galleries` -> `{"galleries": [Gallery]}`
pub const SEARCH_GALLERIES: Route = Route {
    name: "search_galleries",
    method: Method::GET,
    path: "/api/v1/json/search/galleries",
    query: &["q", "key", "page"],
    envelope: Some("galleries"),
};

/// `GET /api/v1/json/search/posts` -> `{"posts": [Post]}`
pub const SEARCH_POSTS: Route = Route {
    name: "search_posts",
    method: Method::GET,
    path: "/api/v1/json/search/posts",
    query: &["q", "key", "page"],
    envelope: Some("posts"),
};

/// `GET /api/v1/json/search/images` -> `{"images": [Image]}`
pub const SEARCH_IMAGES: Route = Route {
    name: "search_images",
    method: Method::GET,
    path: "/api/v1/json/search/images",
    query: &["q", "key", "filter_id", "page", "per_page", "sd", "sf"],
    envelope: Some("images"),
};

/// `GET /api/v1/json/search/tags` -> `{"tags": [Tag]}`
pub const SEARCH_TAGS: Route = Route {
    name: "search_tags",
    method: Method::GET,
    path: "/api/v1/json/search/tags",
    query: &["q", "page"],
    envelope: Some("tags"),
};

/// `POST /api/v1/json/search/reverse` -> `{"images": [Image]}`
pub const SEARCH_REVERSE: Route = Route {
    name: "search_reverse",
    method: Method::POST,
    path: "/api/v1/json/search/reverse",
    query: &["url", "distance", "key"],
    envelope: Some("images"),
};

/// `GET /api/v1/json/forums` -> `{"forums": [Forum]}`
pub const FORUMS: Route = Route {
    name: "forums",
    method: Method::GET,
    path: "/api/v1/json/forums",
    query: &[],
    envelope: Some("forums"),
};

/// `GET /api/v1/json/forums/:short_name` -> `{"forum": Forum}`
pub const FORUM: Route = Route {
    name: "forum",
    method: Method::GET,
    path: "/api/v1/json/forums/:short_name",
    query: &[],
    envelope: Some("forum"),
};

/// `GET /api/v1/json/forums/:short_name/topics` -> `{"topics": [Topic]}`
pub const FORUM_TOPICS: Route = Route {
    name: "forum_topics",
    method: Method::GET,
    path: "/api/v1/json/forums/:short_name/topics",
    query: &["page"],
    envelope: Some("topics"),
};

/// `GET /api/v1/json/forums/:short_name/topics/:topic_slug` -> `{"topic": Topic}`
pub const FORUM_TOPIC: Route = Route {
    name: "forum_topic",
    method: Method::GET,
    path: "/api/v1/json/forums/:short_name/topics/:topic_slug",
    query: &[],
    envelope: Some("topic"),
};

/// `GET /api/v1/json/forums/:short_name/topics/:topic_slug/posts` -> `{"posts": [Post]}`
pub const FORUM_POSTS: Route = Route {
    name: "forum_posts",
    method: Method::GET,
    path: "/api/v1/json/forums/:short_name/topics/:topic_slug/posts",
    query: &["page"],
    envelope: Some("posts"),
};

/// `GET /api/v1/json/forums/:short_name/topics/:topic_slug/posts/:post_id` -> `{"post": Post}`
pub const FORUM_POST: Route = Route {
    name: "forum_post",
    method: Method::GET,
    path: "/api/v1/json/forums/:short_name/topics/:topic_slug/posts/:post_id",
    query: &[],
    envelope: Some("post"),
};

/// Every route the library dispatches, in the order the API documents them.
pub const ROUTES: &[&Route] = &[
    &COMMENT,
    &IMAGE,
    &FEATURED_IMAGE,
    &TAG,
    &POST,
    &USER,
    &FILTER,
    &SYSTEM_FILTERS,
    &USER_FILTERS,
    &OEMBED,
    &SEARCH_COMMENTS,
    &SEARCH_GALLERIES,
    &SEARCH_POSTS,
    &SEARCH_IMAGES,
    &SEARCH_TAGS,
    &SEARCH_REVERSE,
    &FORUMS,
    &FORUM,
    &FORUM_TOPICS,
    &FORUM_TOPIC,
    &FORUM_POSTS,
    &FORUM_POST,
];

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://derpibooru.org";

    #[test]
    fn substitutes_documented_example_urls() {
        // The example URL published for every route that takes path
        // parameters.
        assert_eq!(
            COMMENT.url(BASE, &["1000"]),
            "https://derpibooru.org/api/v1/json/comments/1000"
        );
        assert_eq!(
            IMAGE.url(BASE, &["1"]),
            "https://derpibooru.org/api/v1/json/images/1"
        );
        assert_eq!(
            TAG.url(BASE, &["artist-colon-atryl"]),
            "https://derpibooru.org/api/v1/json/tags/artist-colon-atryl"
        );
        assert_eq!(
            POST.url(BASE, &["2730144"]),
            "https://derpibooru.org/api/v1/json/posts/2730144"
        );
        assert_eq!(
            USER.url(BASE, &["216494"]),
            "https://derpibooru.org/api/v1/json/profiles/216494"
        );
        assert_eq!(
            FILTER.url(BASE, &["56027"]),
            "https://derpibooru.org/api/v1/json/filters/56027"
        );
        assert_eq!(
            FORUM.url(BASE, &["dis"]),
            "https://derpibooru.org/api/v1/json/forums/dis"
        );
        assert_eq!(
            FORUM_TOPICS.url(BASE, &["dis"]),
            "https://derpibooru.org/api/v1/json/forums/dis/topics"
        );
        assert_eq!(
            FORUM_TOPIC.url(BASE, &["dis", "ask-the-mods-anything"]),
            "https://derpibooru.org/api/v1/json/forums/dis/topics/ask-the-mods-anything"
        );
        assert_eq!(
            FORUM_POSTS.url(BASE, &["dis", "ask-the-mods-anything"]),
            "https://derpibooru.org/api/v1/json/forums/dis/topics/ask-the-mods-anything/posts"
        );
        assert_eq!(
            FORUM_POST.url(BASE, &["dis", "ask-the-mods-anything", "2761095"]),
            "https://derpibooru.org/api/v1/json/forums/dis/topics/ask-the-mods-anything/posts/2761095"
        );
    }

    #[test]
    fn static_paths_pass_through_untouched() {
        assert_eq!(
            FEATURED_IMAGE.url(BASE, &[]),
            "https://derpibooru.org/api/v1/json/images/featured"
        );
        assert_eq!(
            SYSTEM_FILTERS.url(BASE, &[]),
            "https://derpibooru.org/api/v1/json/filters/system"
        );
        assert_eq!(
            USER_FILTERS.url(BASE, &[]),
            "https://derpibooru.org/api/v1/json/filters/user"
        );
        assert_eq!(
            OEMBED.url(BASE, &[]),
            "https://derpibooru.org/api/v1/json/oembed"
        );
        assert_eq!(
            SEARCH_IMAGES.url(BASE, &[]),
            "https://derpibooru.org/api/v1/json/search/images"
        );
        assert_eq!(
            SEARCH_REVERSE.url(BASE, &[]),
            "https://derpibooru.org/api/v1/json/search/reverse"
        );
        assert_eq!(
            FORUMS.url(BASE, &[]),
            "https://derpibooru.org/api/v1/json/forums"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_tolerated() {
        assert_eq!(
            COMMENT.url("https://derpibooru.org/", &["1000"]),
            "https://derpibooru.org/api/v1/json/comments/1000"
        );
    }

    #[test]
    fn registry_is_consistent() {
        for route in ROUTES {
            assert!(route.path.starts_with("/api/v1/json/"), "{}", route.name);
            // Search routes take the query string; everything paginated
            // takes `page`.
            if route.path.starts_with("/api/v1/json/search/") && route.name != "search_reverse" {
                assert!(route.accepts("q"), "{}", route.name);
            }
        }
        assert_eq!(SEARCH_REVERSE.method, Method::POST);
        assert!(SEARCH_IMAGES.accepts("sd") && SEARCH_IMAGES.accepts("sf"));
    }
}
