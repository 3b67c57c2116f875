use std::rc::Rc;

use log::debug;
use web_sys::{window, HtmlElement, HtmlVideoElement, MouseEvent};
use yew::prelude::*;

use crate::data::profile::{DoctorProfile, Video};

const MUTED_KEY: &str = "videos_muted";

/// Anything other than an explicit "false" keeps previews muted.
fn parse_muted(stored: Option<String>) -> bool {
    stored.as_deref() != Some("false")
}

fn load_muted() -> bool {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(MUTED_KEY).ok().flatten());
    parse_muted(stored)
}

fn store_muted(muted: bool) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(MUTED_KEY, if muted { "true" } else { "false" });
    }
}

fn carousel_step(visible_width: i32) -> f64 {
    f64::from(visible_width) * 0.8
}

#[derive(Properties, PartialEq)]
struct VideoCardProps {
    video: Video,
    playing: bool,
    muted: bool,
    on_hover: Callback<Option<String>>,
    on_toggle_mute: Callback<()>,
    on_open: Callback<Video>,
}

#[function_component(VideoCard)]
fn video_card(props: &VideoCardProps) -> Html {
    let video_ref = use_node_ref();

    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |(playing, muted)| {
                if let Some(element) = video_ref.cast::<HtmlVideoElement>() {
                    let _ = element.set_attribute("playsinline", "");
                    element.set_muted(*muted);
                    if *playing {
                        let _ = element.play();
                    } else {
                        let _ = element.pause();
                        // Back to the first frame.
                        element.load();
                    }
                }
                || ()
            },
            (props.playing, props.muted),
        );
    }

    let on_enter = {
        let on_hover = props.on_hover.clone();
        let id = props.video.id.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(Some(id.clone())))
    };
    let on_leave = {
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(None))
    };
    let on_click = {
        let on_open = props.on_open.clone();
        let video = props.video.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(video.clone()))
    };
    let on_mute = {
        let on_toggle_mute = props.on_toggle_mute.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_toggle_mute.emit(());
        })
    };

    let video = &props.video;
    html! {
        <div class="video-card" onmouseenter={on_enter} onmouseleave={on_leave}>
            <div class="video-frame" onclick={on_click}>
                <video
                    ref={video_ref}
                    src={video.video_url.clone()}
                    loop=true
                    preload="metadata"
                >
                    {"Your browser does not support the video tag."}
                </video>
                if !props.playing {
                    <div class="video-play">{"▶"}</div>
                }
                if let Some(disclaimer) = &video.disclaimer {
                    <div class="video-disclaimer">{disclaimer}</div>
                }
                <div class="video-duration">{format!("⏱ {}", video.duration)}</div>
                if props.playing {
                    <button class="video-mute" onclick={on_mute}>
                        { if props.muted { "🔇" } else { "🔊" } }
                    </button>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideosProps {
    pub id: AttrValue,
    pub doctor: Rc<DoctorProfile>,
}

#[function_component(Videos)]
pub fn videos(props: &VideosProps) -> Html {
    let playing = use_state(|| None::<String>);
    let muted = use_state(load_muted);
    let selected = use_state(|| None::<Video>);
    let carousel_ref = use_node_ref();

    let on_hover = {
        let playing = playing.clone();
        Callback::from(move |id: Option<String>| playing.set(id))
    };
    let on_toggle_mute = {
        let muted = muted.clone();
        Callback::from(move |_| {
            let next = !*muted;
            debug!("Video previews muted: {}", next);
            store_muted(next);
            muted.set(next);
        })
    };
    let on_open = {
        let selected = selected.clone();
        let playing = playing.clone();
        Callback::from(move |video: Video| {
            playing.set(None);
            selected.set(Some(video));
        })
    };
    let close_modal = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };
    let scroll = |direction: f64| {
        let carousel_ref = carousel_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(carousel) = carousel_ref.cast::<HtmlElement>() {
                let by = carousel_step(carousel.offset_width()) * direction;
                carousel.scroll_by_with_x_and_y(by, 0.0);
            }
        })
    };

    let surname = props.doctor.surname().to_string();

    html! {
        <section id={props.id.clone()} class="videos-section">
            <div class="videos-header">
                <h2>{"🎬 "}{format!("Insights from Dr. {}", surname)}</h2>
                <p>{"Short, practical clips on hormones, metabolism & weight health."}</p>
            </div>

            if props.doctor.videos.is_empty() {
                <div class="videos-empty">
                    <p>{format!("Insights from Dr. {} coming soon...", surname)}</p>
                </div>
            } else {
                <div class="videos-carousel-wrap">
                    <div class="videos-fade left"></div>
                    <div class="videos-fade right"></div>
                    <div class="videos-carousel" ref={carousel_ref.clone()}>
                        { for props.doctor.videos.iter().map(|video| html! {
                            <VideoCard
                                key={video.id.clone()}
                                video={video.clone()}
                                playing={playing.as_deref() == Some(video.id.as_str())}
                                muted={*muted}
                                on_hover={on_hover.clone()}
                                on_toggle_mute={on_toggle_mute.clone()}
                                on_open={on_open.clone()}
                            />
                        }) }
                    </div>
                    <div class="videos-arrows">
                        <button onclick={scroll(-1.0)}>{"‹"}</button>
                        <button onclick={scroll(1.0)}>{"›"}</button>
                    </div>
                </div>
            }

            if let Some(video) = (*selected).clone() {
                <div class="video-modal-backdrop" onclick={close_modal.clone()}>
                    <div class="video-modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                        <button class="video-modal-close" onclick={close_modal}>{"×"}</button>
                        <div class="video-modal-player">
                            <video
                                controls=true
                                autoplay=true
                                src={video.video_url.clone()}
                                poster={video.thumbnail.clone()}
                            >
                                {"Your browser does not support the video tag."}
                            </video>
                        </div>
                        <div class="video-modal-body">
                            <h3>{&video.title}</h3>
                            <p>{&video.description}</p>
                            <div class="video-tags">
                                <span class="video-tag">{format!("⏱ {}", video.duration)}</span>
                                { for video.tags.iter().map(|tag| html! { <span class="video-tag">{tag}</span> }) }
                            </div>
                        </div>
                    </div>
                </div>
            }
            <style>
                {r#"
                .videos-section {
                    background: #ffffff;
                    border-radius: 1rem;
                    padding: 2rem;
                    margin: 2rem auto;
                    max-width: 72rem;
                }
                .videos-header h2 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #2e3523;
                    margin: 0;
                }
                .videos-header p {
                    color: #6b6f66;
                    margin: 0.25rem 0 1rem 0;
                }
                .videos-carousel-wrap {
                    position: relative;
                }
                .videos-fade {
                    position: absolute;
                    top: 0;
                    bottom: 0;
                    width: 4rem;
                    z-index: 1;
                    pointer-events: none;
                }
                .videos-fade.left {
                    left: 0;
                    background: linear-gradient(to right, #ffffff, transparent);
                }
                .videos-fade.right {
                    right: 0;
                    background: linear-gradient(to left, #ffffff, transparent);
                }
                .videos-carousel {
                    display: flex;
                    gap: 1rem;
                    overflow-x: scroll;
                    scroll-snap-type: x mandatory;
                    scroll-behavior: smooth;
                    padding-bottom: 1rem;
                    scrollbar-width: none;
                }
                .videos-carousel::-webkit-scrollbar {
                    display: none;
                }
                .video-card {
                    flex: none;
                    width: 320px;
                    scroll-snap-align: start;
                }
                .video-frame {
                    position: relative;
                    width: 100%;
                    height: 568px;
                    border-radius: 18px;
                    overflow: hidden;
                    background: #000000;
                    cursor: pointer;
                    border: 1px solid #e4e7df;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }
                .video-frame:hover {
                    transform: scale(1.02);
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                }
                .video-frame video {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .video-play {
                    position: absolute;
                    top: 0.75rem;
                    right: 0.75rem;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.9);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #2e3523;
                }
                .video-disclaimer {
                    position: absolute;
                    bottom: 0.75rem;
                    left: 0.75rem;
                    max-width: calc(100% - 80px);
                    color: #ffffff;
                    font-size: 10px;
                    white-space: nowrap;
                    overflow: hidden;
                    text-overflow: ellipsis;
                }
                .video-duration {
                    position: absolute;
                    bottom: 0.75rem;
                    right: 0.75rem;
                    background: #2e3523;
                    color: #ffffff;
                    font-size: 0.75rem;
                    font-weight: 500;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    opacity: 0.9;
                }
                .video-mute {
                    position: absolute;
                    bottom: 0.75rem;
                    left: 0.75rem;
                    width: 2rem;
                    height: 2rem;
                    border: none;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.9);
                    cursor: pointer;
                }
                .videos-arrows {
                    position: absolute;
                    top: 50%;
                    left: 0;
                    right: 0;
                    transform: translateY(-50%);
                    display: flex;
                    justify-content: space-between;
                    padding: 0 0.5rem;
                    z-index: 2;
                    pointer-events: none;
                }
                .videos-arrows button {
                    width: 2.5rem;
                    height: 2.5rem;
                    border: none;
                    border-radius: 9999px;
                    background: #ffffff;
                    color: #434a35;
                    font-size: 1.5rem;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    cursor: pointer;
                    pointer-events: auto;
                }
                .videos-empty {
                    text-align: center;
                    padding: 3rem 0;
                    color: #6b6f66;
                }
                .video-modal-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.7);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 1000;
                }
                .video-modal {
                    position: relative;
                    width: 90%;
                    max-width: 56rem;
                    background: #ffffff;
                    border-radius: 0.5rem;
                    overflow: hidden;
                }
                .video-modal-close {
                    position: absolute;
                    top: 0.5rem;
                    right: 0.75rem;
                    z-index: 1;
                    background: none;
                    border: none;
                    color: #ffffff;
                    font-size: 2rem;
                    cursor: pointer;
                }
                .video-modal-player {
                    aspect-ratio: 16 / 9;
                    background: #000000;
                }
                .video-modal-player video {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                }
                .video-modal-body {
                    padding: 1.5rem;
                }
                .video-modal-body h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #2e3523;
                    margin: 0 0 0.5rem 0;
                }
                .video-modal-body p {
                    color: #6b6f66;
                    line-height: 1.6;
                }
                .video-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-top: 1rem;
                }
                .video-tag {
                    font-size: 0.75rem;
                    background: #e4e7df;
                    color: #6b6f66;
                    border-radius: 9999px;
                    padding: 0.25rem 0.75rem;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previews_default_to_muted() {
        assert!(parse_muted(None));
        assert!(parse_muted(Some("true".into())));
        assert!(parse_muted(Some("garbage".into())));
        assert!(!parse_muted(Some("false".into())));
    }

    #[test]
    fn arrows_scroll_most_of_the_visible_width() {
        assert_eq!(carousel_step(1000), 800.0);
        assert_eq!(carousel_step(0), 0.0);
    }
}
