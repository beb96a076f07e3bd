use aquasite_engine::blocks::{
    AccordionData, BannerData, BannerSize, Block, BlockData, DescriptionData, GalleryData,
    GalleryLayout, LogoData, LogoSize, LogosData, PhotoData, TeamData, TeamMember, TitleData,
};
use aquasite_engine::editing::AssetSlot;
use aquasite_engine::upload::AssetFile;
use dioxus::prelude::*;

use super::AssetInput;

type UploadCallback = Callback<(AssetSlot, Vec<AssetFile>)>;

/// Field editor for one block. Every change hands back a complete payload of
/// the same type.
#[component]
pub fn BlockForm(
    block: Block,
    #[props(default)] uploading: bool,
    on_change: Callback<BlockData>,
    on_upload: UploadCallback,
) -> Element {
    match block.data {
        BlockData::Banner(data) => rsx! {
            BannerForm { data, uploading, on_change, on_upload }
        },
        BlockData::Title(data) => rsx! {
            TitleForm { data, on_change }
        },
        BlockData::Photo(data) => rsx! {
            PhotoForm { data, uploading, on_change, on_upload }
        },
        BlockData::Description(data) => rsx! {
            DescriptionForm { data, on_change }
        },
        BlockData::Gallery(data) => rsx! {
            GalleryForm { data, uploading, on_change, on_upload }
        },
        BlockData::Logos(data) => rsx! {
            LogosForm { data, uploading, on_change, on_upload }
        },
        BlockData::Logo(data) => rsx! {
            LogoForm { data, uploading, on_change, on_upload }
        },
        BlockData::Team(data) => rsx! {
            TeamForm { data, uploading, on_change, on_upload }
        },
        BlockData::Accordion(data) => rsx! {
            AccordionForm { data, on_change }
        },
        BlockData::Unknown { tag, .. } => rsx! {
            p {
                class: "unknown-block",
                "Bloco do tipo \"{tag}\" não pode ser editado aqui e será mantido como está."
            }
        },
    }
}

#[component]
fn TextField(
    #[props(into)] label: String,
    #[props(into)] value: String,
    #[props(default)] multiline: bool,
    #[props(into, default)] placeholder: String,
    on_input: Callback<String>,
) -> Element {
    rsx! {
        label {
            class: "field",
            span { class: "field-label", "{label}" }
            if multiline {
                textarea {
                    rows: 6,
                    value: "{value}",
                    placeholder: "{placeholder}",
                    oninput: move |event: Event<FormData>| on_input.call(event.value()),
                }
            } else {
                input {
                    r#type: "text",
                    value: "{value}",
                    placeholder: "{placeholder}",
                    oninput: move |event: Event<FormData>| on_input.call(event.value()),
                }
            }
        }
    }
}

#[component]
fn PixelField(#[props(into)] label: String, value: u32, on_input: Callback<u32>) -> Element {
    rsx! {
        label {
            class: "field field-number",
            span { class: "field-label", "{label}" }
            input {
                r#type: "number",
                min: "1",
                value: "{value}",
                oninput: move |event: Event<FormData>| {
                    if let Ok(pixels) = event.value().trim().parse::<u32>()
                        && pixels > 0
                    {
                        on_input.call(pixels);
                    }
                },
            }
        }
    }
}

#[component]
fn Thumbnail(#[props(into)] url: String) -> Element {
    if url.trim().is_empty() {
        return rsx! {
            div { class: "thumb thumb-empty", "Sem imagem" }
        };
    }
    rsx! {
        img { class: "thumb", src: "{url}", alt: "" }
    }
}

#[component]
fn BannerForm(
    data: BannerData,
    uploading: bool,
    on_change: Callback<BlockData>,
    on_upload: UploadCallback,
) -> Element {
    let current = data.effective_size();
    rsx! {
        div {
            class: "block-form",
            Thumbnail { url: data.image_url.clone() }
            TextField {
                label: "URL da imagem",
                value: data.image_url.clone(),
                on_input: {
                    let data = data.clone();
                    move |image_url: String| {
                        on_change.call(BlockData::Banner(BannerData { image_url, ..data.clone() }));
                    }
                },
            }
            AssetInput { slot: AssetSlot::Banner, label: "Enviar imagem", busy: uploading, on_files: on_upload }
            label {
                class: "field",
                span { class: "field-label", "Tamanho" }
                select {
                    onchange: {
                        let data = data.clone();
                        move |event: Event<FormData>| {
                            let size = BannerSize::from_tag(&event.value());
                            on_change.call(BlockData::Banner(BannerData { size, ..data.clone() }));
                        }
                    },
                    for size in BannerSize::ALL {
                        option {
                            key: "{size.as_str()}",
                            value: size.as_str(),
                            selected: size == current,
                            {size.label()}
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TitleForm(data: TitleData, on_change: Callback<BlockData>) -> Element {
    rsx! {
        div {
            class: "block-form",
            TextField {
                label: "Título",
                value: data.title.clone(),
                on_input: move |title: String| on_change.call(BlockData::Title(TitleData { title })),
            }
        }
    }
}

#[component]
fn PhotoForm(
    data: PhotoData,
    uploading: bool,
    on_change: Callback<BlockData>,
    on_upload: UploadCallback,
) -> Element {
    rsx! {
        div {
            class: "block-form",
            Thumbnail { url: data.image_url.clone() }
            TextField {
                label: "URL da foto",
                value: data.image_url.clone(),
                on_input: move |image_url: String| {
                    on_change.call(BlockData::Photo(PhotoData { image_url }));
                },
            }
            AssetInput { slot: AssetSlot::Photo, label: "Enviar foto", busy: uploading, on_files: on_upload }
        }
    }
}

#[component]
fn DescriptionForm(data: DescriptionData, on_change: Callback<BlockData>) -> Element {
    rsx! {
        div {
            class: "block-form",
            TextField {
                label: "Texto (HTML)",
                value: data.text.clone(),
                multiline: true,
                placeholder: "<p>Escreva aqui…</p>",
                on_input: move |text: String| {
                    on_change.call(BlockData::Description(DescriptionData { text }));
                },
            }
        }
    }
}

#[component]
fn GalleryForm(
    data: GalleryData,
    uploading: bool,
    on_change: Callback<BlockData>,
    on_upload: UploadCallback,
) -> Element {
    let current = data.layout;
    rsx! {
        div {
            class: "block-form",
            label {
                class: "field",
                span { class: "field-label", "Layout" }
                select {
                    onchange: {
                        let data = data.clone();
                        move |event: Event<FormData>| {
                            let layout = GalleryLayout::from_tag(&event.value()).unwrap_or_default();
                            on_change.call(BlockData::Gallery(GalleryData { layout, ..data.clone() }));
                        }
                    },
                    for layout in GalleryLayout::ALL {
                        option {
                            key: "{layout.as_str()}",
                            value: layout.as_str(),
                            selected: layout == current,
                            {layout.label()}
                        }
                    }
                }
            }
            div {
                class: "thumb-list",
                for (index, url) in data.images.iter().cloned().enumerate() {
                    div {
                        key: "{index}-{url}",
                        class: "thumb-item",
                        Thumbnail { url }
                        button {
                            class: "thumb-remove",
                            "aria-label": "Remover imagem",
                            onclick: {
                                let data = data.clone();
                                move |_| {
                                    let mut next = data.clone();
                                    if index < next.images.len() {
                                        next.images.remove(index);
                                    }
                                    on_change.call(BlockData::Gallery(next));
                                }
                            },
                            "×"
                        }
                    }
                }
            }
            AssetInput { slot: AssetSlot::GalleryAppend, label: "Adicionar imagens", busy: uploading, on_files: on_upload }
        }
    }
}

#[component]
fn LogosForm(
    data: LogosData,
    uploading: bool,
    on_change: Callback<BlockData>,
    on_upload: UploadCallback,
) -> Element {
    rsx! {
        div {
            class: "block-form",
            Thumbnail { url: data.logo_url.clone() }
            TextField {
                label: "URL da imagem",
                value: data.logo_url.clone(),
                on_input: {
                    let data = data.clone();
                    move |logo_url: String| {
                        on_change.call(BlockData::Logos(LogosData { logo_url, ..data.clone() }));
                    }
                },
            }
            AssetInput { slot: AssetSlot::LogosImage, label: "Enviar imagem", busy: uploading, on_files: on_upload }
            div {
                class: "field-row",
                PixelField {
                    label: "Largura (px)",
                    value: data.size.width,
                    on_input: {
                        let data = data.clone();
                        move |width: u32| {
                            let mut next = data.clone();
                            next.size.width = width;
                            on_change.call(BlockData::Logos(next));
                        }
                    },
                }
                PixelField {
                    label: "Altura (px)",
                    value: data.size.height,
                    on_input: {
                        let data = data.clone();
                        move |height: u32| {
                            let mut next = data.clone();
                            next.size.height = height;
                            on_change.call(BlockData::Logos(next));
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn LogoForm(
    data: LogoData,
    uploading: bool,
    on_change: Callback<BlockData>,
    on_upload: UploadCallback,
) -> Element {
    let current = data.size;
    rsx! {
        div {
            class: "block-form",
            TextField {
                label: "Título",
                value: data.title.clone(),
                on_input: {
                    let data = data.clone();
                    move |title: String| {
                        on_change.call(BlockData::Logo(LogoData { title, ..data.clone() }));
                    }
                },
            }
            label {
                class: "field",
                span { class: "field-label", "Tamanho dos logos" }
                select {
                    onchange: {
                        let data = data.clone();
                        move |event: Event<FormData>| {
                            let size = LogoSize::from_tag(&event.value()).unwrap_or_default();
                            on_change.call(BlockData::Logo(LogoData { size, ..data.clone() }));
                        }
                    },
                    for size in LogoSize::ALL {
                        option {
                            key: "{size.as_str()}",
                            value: size.as_str(),
                            selected: size == current,
                            {size.label()}
                        }
                    }
                }
            }
            for (index, entry) in data.logos.iter().cloned().enumerate() {
                div {
                    key: "{index}",
                    class: "list-entry",
                    Thumbnail { url: entry.logo_url.clone() }
                    TextField {
                        label: "Nome",
                        value: entry.name.clone(),
                        on_input: {
                            let data = data.clone();
                            move |name: String| {
                                let mut next = data.clone();
                                if let Some(entry) = next.logos.get_mut(index) {
                                    entry.name = name;
                                }
                                on_change.call(BlockData::Logo(next));
                            }
                        },
                    }
                    AssetInput { slot: AssetSlot::LogoEntry { index }, label: "Trocar imagem", on_files: on_upload }
                    button {
                        class: "entry-remove",
                        onclick: {
                            let data = data.clone();
                            move |_| {
                                let mut next = data.clone();
                                if index < next.logos.len() {
                                    next.logos.remove(index);
                                }
                                on_change.call(BlockData::Logo(next));
                            }
                        },
                        "Remover"
                    }
                }
            }
            AssetInput { slot: AssetSlot::LogoAppend, label: "Adicionar logos", busy: uploading, on_files: on_upload }
        }
    }
}

#[component]
fn TeamForm(
    data: TeamData,
    uploading: bool,
    on_change: Callback<BlockData>,
    on_upload: UploadCallback,
) -> Element {
    rsx! {
        div {
            class: "block-form",
            for (index, member) in data.members.iter().cloned().enumerate() {
                div {
                    key: "{index}",
                    class: "list-entry",
                    Thumbnail { url: member.avatar_url.clone() }
                    AssetInput { slot: AssetSlot::TeamAvatar { index }, label: "Trocar foto", on_files: on_upload }
                    TextField {
                        label: "Nome",
                        value: member.name.clone(),
                        on_input: {
                            let data = data.clone();
                            move |name: String| {
                                let mut next = data.clone();
                                if let Some(member) = next.members.get_mut(index) {
                                    member.name = name;
                                }
                                on_change.call(BlockData::Team(next));
                            }
                        },
                    }
                    TextField {
                        label: "Cargo",
                        value: member.role.clone(),
                        on_input: {
                            let data = data.clone();
                            move |role: String| {
                                let mut next = data.clone();
                                if let Some(member) = next.members.get_mut(index) {
                                    member.role = role;
                                }
                                on_change.call(BlockData::Team(next));
                            }
                        },
                    }
                    button {
                        class: "entry-remove",
                        onclick: {
                            let data = data.clone();
                            move |_| {
                                let mut next = data.clone();
                                if index < next.members.len() {
                                    next.members.remove(index);
                                }
                                on_change.call(BlockData::Team(next));
                            }
                        },
                        "Remover"
                    }
                }
            }
            div {
                class: "field-row",
                button {
                    class: "entry-add",
                    onclick: {
                        let data = data.clone();
                        move |_| {
                            let mut next = data.clone();
                            next.members.push(TeamMember::default());
                            on_change.call(BlockData::Team(next));
                        }
                    },
                    "Adicionar membro"
                }
                AssetInput { slot: AssetSlot::TeamAppend, label: "Adicionar por foto", busy: uploading, on_files: on_upload }
            }
        }
    }
}

#[component]
fn AccordionForm(data: AccordionData, on_change: Callback<BlockData>) -> Element {
    rsx! {
        div {
            class: "block-form",
            TextField {
                label: "Título",
                value: data.title.clone(),
                on_input: {
                    let data = data.clone();
                    move |title: String| {
                        on_change.call(BlockData::Accordion(AccordionData { title, ..data.clone() }));
                    }
                },
            }
            TextField {
                label: "Conteúdo (HTML)",
                value: data.content.clone(),
                multiline: true,
                on_input: {
                    let data = data.clone();
                    move |content: String| {
                        on_change.call(BlockData::Accordion(AccordionData { content, ..data.clone() }));
                    }
                },
            }
        }
    }
}
