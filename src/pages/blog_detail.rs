//! Blog Detail Page
//!
//! One post addressed by the `:id` route parameter, plus the comment
//! sub-flow. The post is re-fetched when the parameter changes and after a
//! comment is accepted.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use portfolio_core::comments::CommentComposer;
use portfolio_core::copy::{BLOG_DETAIL, NO_COMMENTS};
use portfolio_core::models::{BlogPost, Comment};
use portfolio_core::text::format_date;
use portfolio_core::FetchState;

use crate::api;
use crate::components::{BannerMessage, ErrorMessage, Loading, TagList};
use crate::context::{use_auth, AuthContext};
use crate::markdown::render_markdown;

#[component]
pub fn BlogDetailPage() -> impl IntoView {
    let auth = use_auth();
    let params = use_params_map();
    let post_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let state = RwSignal::new(FetchState::<BlogPost>::default());
    let composer = RwSignal::new(CommentComposer::default());

    // Re-fetch whenever the route id changes
    Effect::new(move |_| {
        let id = post_id.get();
        load_post(auth, state, id);
    });

    let body = move || {
        match state.get() {
            FetchState::Idle | FetchState::Loading => {
                view! { <Loading message=BLOG_DETAIL.loading /> }.into_any()
            }
            FetchState::Errored(message) => view! { <ErrorMessage message=message /> }.into_any(),
            FetchState::Ready(post) => {
                let comments = post.comments.clone();
                view! {
                    <PostArticle post=post />
                    <CommentSection comments=comments composer=composer post_id=post_id state=state />
                }
                .into_any()
            }
        }
    };

    view! {
        <div class="blog-detail">
            <A href="/blog">"← Back to Blog"</A>
            {body}
        </div>
    }
}

fn load_post(auth: AuthContext, state: RwSignal<FetchState<BlogPost>>, id: String) {
    state.update(FetchState::begin);
    if id.is_empty() {
        state.set(FetchState::Errored(BLOG_DETAIL.empty.to_string()));
        return;
    }
    let client = auth.client();
    spawn_local(async move {
        let result = api::get_post(&client, &id).await;
        if let Err(e) = &result {
            log::warn!("[BlogDetail] load {} failed: {}", id, e);
        }
        state.update(|s| s.resolve(result, BLOG_DETAIL.load_failed));
    });
}

#[component]
fn PostArticle(post: BlogPost) -> impl IntoView {
    let image = post.image_url().map(str::to_string);
    let author = post.author_name().map(str::to_string);
    let date = post.created_at.as_ref().map(format_date);
    let html = render_markdown(&post.content);
    let BlogPost { title, tags, .. } = post;
    let alt = title.clone();

    view! {
        <article class="blog-article">
            {image.map(|src| view! { <img src=src alt=alt class="blog-hero-image" /> })}
            <div class="blog-meta">
                {date}
                {author.map(|author| view! { <span class="blog-author">{format!("By {}", author)}</span> })}
            </div>
            <h1>{title}</h1>
            <TagList tags=tags />
            <div class="blog-body" inner_html=html></div>
        </article>
    }
}

#[component]
fn CommentSection(
    comments: Vec<Comment>,
    composer: RwSignal<CommentComposer>,
    post_id: Memo<String>,
    state: RwSignal<FetchState<BlogPost>>,
) -> impl IntoView {
    let auth = use_auth();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let viewer = auth.current_user();
        let Some(comment) = composer.try_update(|c| c.submit(viewer.as_ref())).flatten() else {
            return;
        };
        let id = post_id.get_untracked();
        let client = auth.client();
        spawn_local(async move {
            let result = api::add_comment(&client, &id, &comment).await;
            if let Err(e) = &result {
                log::warn!("[BlogDetail] comment on {} failed: {}", id, e);
            }
            let refetch = composer.try_update(|c| c.finish(result)).unwrap_or(false);
            if refetch {
                load_post(auth, state, id);
            }
        });
    };

    let form = move || {
        if auth.is_authenticated() {
            view! {
                <form class="comment-form" on:submit=submit>
                    <BannerMessage banner=Signal::derive(move || composer.with(CommentComposer::banner)) />
                    <textarea
                        rows="4"
                        placeholder="Share your thoughts..."
                        prop:value=move || composer.with(|c| c.text().to_string())
                        on:input=move |ev| composer.update(|c| c.set_text(event_target_value(&ev)))
                    ></textarea>
                    <button type="submit" disabled=move || composer.with(CommentComposer::is_submitting)>
                        {move || {
                            if composer.with(CommentComposer::is_submitting) { "Posting..." } else { "Post Comment" }
                        }}
                    </button>
                </form>
            }
            .into_any()
        } else {
            view! {
                <div class="comment-login-prompt">
                    <A href="/login">"Log in"</A>
                    " to post a comment."
                </div>
            }
            .into_any()
        }
    };

    let list = if comments.is_empty() {
        view! { <p class="no-comments">{NO_COMMENTS}</p> }.into_any()
    } else {
        view! {
            <div class="comment-list">
                {comments.into_iter().map(|comment| {
                    let date = comment.created_at.as_ref().map(format_date);
                    let author = comment.display_author().to_string();
                    view! {
                        <div class="comment">
                            <div class="comment-author">{author}</div>
                            <div class="comment-date">{date}</div>
                            <div class="comment-content">{comment.content}</div>
                        </div>
                    }
                }).collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <section class="comments">
            <h2>"Comments"</h2>
            {form}
            {list}
        </section>
    }
}
