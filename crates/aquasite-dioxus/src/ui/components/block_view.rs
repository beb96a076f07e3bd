use aquasite_engine::blocks::LogoSize;
use aquasite_engine::render::{
    BlockLayout, GalleryPlan, ImageRef, LogoPlan, MemberPlan, PlannedBlock,
};
use dioxus::prelude::*;

/// One planned image with the loading hints its surface chose.
#[component]
pub fn PlanImage(
    image: ImageRef,
    #[props(into)] alt: String,
    #[props(into, default)] class: String,
    #[props(into, default)] style: String,
) -> Element {
    rsx! {
        img {
            class: "{class}",
            style: "{style}",
            src: "{image.url}",
            alt: "{alt}",
            "loading": image.loading.html_loading(),
            "fetchpriority": image.loading.fetch_priority(),
        }
    }
}

/// The planned blocks of a page, in order.
#[component]
pub fn PageBlocks(blocks: Vec<PlannedBlock>) -> Element {
    rsx! {
        for PlannedBlock { id, layout } in blocks {
            section {
                key: "{id}",
                class: "planned-block",
                "data-block-id": "{id}",
                BlockView { layout }
            }
        }
    }
}

#[component]
pub fn BlockView(layout: BlockLayout) -> Element {
    match layout {
        BlockLayout::Banner { image, max_height } => rsx! {
            div {
                class: "block-banner",
                PlanImage {
                    image,
                    alt: "Banner",
                    class: "banner-image",
                    style: "width: 100%; max-height: {max_height}px; object-fit: contain;",
                }
            }
        },
        BlockLayout::Title { text } => rsx! {
            h2 { class: "block-title", "{text}" }
        },
        BlockLayout::Photo { image } => rsx! {
            figure {
                class: "block-photo",
                PlanImage { image, alt: "Foto" }
            }
        },
        BlockLayout::Description { html } => rsx! {
            div {
                class: "block-description rich-text",
                dangerous_inner_html: "{html}",
            }
        },
        BlockLayout::Gallery(plan) => rsx! {
            GalleryView { plan }
        },
        BlockLayout::Logos {
            image,
            width,
            height,
        } => rsx! {
            div {
                class: "block-logos",
                PlanImage {
                    image,
                    alt: "Logo",
                    style: "width: {width}px; height: {height}px; object-fit: contain;",
                }
            }
        },
        BlockLayout::LogoSet { title, size, logos } => rsx! {
            LogoSetView { title, size, logos }
        },
        BlockLayout::Team { members } => rsx! {
            TeamView { members }
        },
        BlockLayout::Accordion {
            title,
            html,
            expanded,
        } => rsx! {
            AccordionView { title, html, expanded }
        },
    }
}

#[component]
fn GalleryView(plan: GalleryPlan) -> Element {
    match plan {
        GalleryPlan::Grid { images } => rsx! {
            div {
                class: "gallery gallery-grid",
                for (i, image) in images.into_iter().enumerate() {
                    PlanImage { key: "{i}", image, alt: format!("Imagem {}", i + 1) }
                }
            }
        },
        GalleryPlan::Block4 { groups } => rsx! {
            div {
                class: "gallery gallery-block4",
                for (g, group) in groups.into_iter().enumerate() {
                    div {
                        key: "{g}",
                        class: "gallery-group",
                        for (i, image) in group.into_iter().enumerate() {
                            PlanImage { key: "{i}", image, alt: format!("Imagem {}", g * 4 + i + 1) }
                        }
                    }
                }
            }
        },
        GalleryPlan::Carousel {
            images,
            show_controls,
        } => rsx! {
            Carousel { images, show_controls }
        },
    }
}

#[component]
fn Carousel(images: Vec<ImageRef>, show_controls: bool) -> Element {
    let mut current = use_signal(|| 0usize);
    let count = images.len();
    let index = current().min(count.saturating_sub(1));
    let Some(image) = images.get(index).cloned() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "gallery gallery-carousel",
            PlanImage { image, alt: format!("Imagem {} de {count}", index + 1), class: "carousel-image" }
            if show_controls {
                button {
                    class: "carousel-prev",
                    "aria-label": "Anterior",
                    onclick: move |_| current.set((index + count - 1) % count),
                    "‹"
                }
                button {
                    class: "carousel-next",
                    "aria-label": "Próxima",
                    onclick: move |_| current.set((index + 1) % count),
                    "›"
                }
                div {
                    class: "carousel-dots",
                    for i in 0..count {
                        button {
                            key: "{i}",
                            class: if i == index { "carousel-dot active" } else { "carousel-dot" },
                            "aria-label": format!("Imagem {}", i + 1),
                            onclick: move |_| current.set(i),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LogoSetView(title: String, size: LogoSize, logos: Vec<LogoPlan>) -> Element {
    let max_height = size.max_height_px();
    let size_class = size.as_str();
    rsx! {
        div {
            class: "block-logo-set logo-{size_class}",
            if !title.is_empty() {
                h3 { class: "logo-set-title", "{title}" }
            }
            div {
                class: "logo-row",
                for (i, LogoPlan { image, name }) in logos.into_iter().enumerate() {
                    figure {
                        key: "{i}",
                        class: "logo-item",
                        PlanImage {
                            image,
                            alt: "{name}",
                            style: "max-height: {max_height}px; object-fit: contain;",
                        }
                        if !name.is_empty() {
                            figcaption { "{name}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TeamView(members: Vec<MemberPlan>) -> Element {
    rsx! {
        div {
            class: "block-team",
            for (i, MemberPlan { avatar, name, role }) in members.into_iter().enumerate() {
                div {
                    key: "{i}",
                    class: "team-member",
                    if let Some(avatar) = avatar {
                        PlanImage { image: avatar, alt: "{name}", class: "team-avatar" }
                    } else {
                        div { class: "team-avatar placeholder", {initials(&name)} }
                    }
                    if !name.is_empty() {
                        p { class: "team-name", "{name}" }
                    }
                    if !role.is_empty() {
                        p { class: "team-role", "{role}" }
                    }
                }
            }
        }
    }
}

#[component]
fn AccordionView(title: String, html: String, expanded: bool) -> Element {
    let mut open = use_signal(|| expanded);
    let is_open = open();
    rsx! {
        div {
            class: "block-accordion",
            button {
                class: "accordion-header",
                "aria-expanded": "{is_open}",
                onclick: move |_| open.toggle(),
                span { "{title}" }
                span { class: "accordion-icon", if is_open { "−" } else { "+" } }
            }
            if is_open {
                div {
                    class: "accordion-body rich-text",
                    dangerous_inner_html: "{html}",
                }
            }
        }
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
