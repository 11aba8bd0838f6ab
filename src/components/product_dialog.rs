// ============================================================================
// PRODUCT DIALOG - alta y edición de productos
// ============================================================================

use web_sys::{File, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::{use_toast, ToastHandle};
use crate::models::{Product, ProductPayload};
use crate::services::product_service;
use crate::utils::validation::{validate_image_type, FormErrors, ProductForm};

#[derive(Clone, PartialEq, Debug)]
pub enum DialogMode {
    Add,
    Update(Product),
}

impl DialogMode {
    fn title(&self) -> &'static str {
        match self {
            DialogMode::Add => "Add Product",
            DialogMode::Update(_) => "Update Product",
        }
    }

    fn initial_form(&self) -> ProductForm {
        match self {
            DialogMode::Add => ProductForm::default(),
            DialogMode::Update(product) => ProductForm::from_payload(&product.payload()),
        }
    }
}

/// What submitting a valid form should do
#[derive(Clone, PartialEq, Debug)]
enum Submission {
    Create(ProductPayload),
    Update { id: String, payload: ProductPayload },
    Unchanged,
}

fn plan_submission(mode: &DialogMode, payload: ProductPayload) -> Submission {
    match mode {
        DialogMode::Add => Submission::Create(payload),
        DialogMode::Update(product) if product.payload() == payload => Submission::Unchanged,
        DialogMode::Update(product) => Submission::Update {
            id: product.id.clone(),
            payload,
        },
    }
}

fn input_value(e: &InputEvent) -> String {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        return input.value();
    }
    e.target_dyn_into::<HtmlTextAreaElement>()
        .map(|area| area.value())
        .unwrap_or_default()
}

fn selected_file(file_ref: &NodeRef) -> Option<File> {
    file_ref
        .cast::<HtmlInputElement>()
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

#[derive(Properties, PartialEq)]
pub struct ProductDialogProps {
    pub mode: DialogMode,
    pub on_close: Callback<()>,
    /// Called after a successful create or update
    pub on_saved: Callback<()>,
}

#[function_component(ProductDialog)]
pub fn product_dialog(props: &ProductDialogProps) -> Html {
    let form = use_state(|| props.mode.initial_form());
    let errors = use_state(FormErrors::default);
    let submitting = use_state(|| false);
    let file_ref = use_node_ref();
    let toast = use_toast();

    let on_field = |field: &'static str| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            let mut next = (*form).clone();
            match field {
                "name" => next.name = value,
                "category" => next.category = value,
                "description" => next.description = value,
                _ => next.price = value,
            }
            form.set(next);
        })
    };

    let on_file_change = {
        let errors = errors.clone();
        let file_ref = file_ref.clone();
        Callback::from(move |_: Event| {
            let mut next = (*errors).clone();
            next.remove("image");
            if let Some(file) = selected_file(&file_ref) {
                if let Err(message) = validate_image_type(&file.type_()) {
                    next.add("image", message);
                }
            }
            errors.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let file_ref = file_ref.clone();
        let mode = props.mode.clone();
        let on_close = props.on_close.clone();
        let on_saved = props.on_saved.clone();
        let toast = toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let payload = match form.validate() {
                Ok(payload) => payload,
                Err(field_errors) => {
                    errors.set(field_errors);
                    return;
                }
            };

            let image = selected_file(&file_ref);
            if let Some(Err(message)) = image.as_ref().map(|f| validate_image_type(&f.type_())) {
                let mut next = FormErrors::new();
                next.add("image", message);
                errors.set(next);
                return;
            }
            errors.set(FormErrors::new());

            let submission = plan_submission(&mode, payload);
            if submission == Submission::Unchanged {
                log::info!("📝 No changes to save");
                on_close.emit(());
                return;
            }

            submitting.set(true);
            let submitting = submitting.clone();
            let on_saved = on_saved.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match submission {
                    Submission::Create(payload) => create_with_image(&payload, image, &toast).await,
                    Submission::Update { id, payload } => product_service::update_product(&id, &payload)
                        .await
                        .map(|product| format!("Product \"{}\" updated.", product.name)),
                    Submission::Unchanged => Ok(String::new()),
                };
                submitting.set(false);
                match result {
                    Ok(message) => {
                        toast.success(message);
                        on_saved.emit(());
                    }
                    Err(message) => toast.error(message),
                }
            });
        })
    };

    let field_error = |field: &str| match errors.get(field) {
        Some(message) => html! { <span class="field-error">{ message.to_string() }</span> },
        None => html! {},
    };

    let on_overlay_click = props.on_close.reform(|_: MouseEvent| ());
    let on_close_click = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="modal active">
            <div class="modal-overlay" onclick={on_overlay_click}></div>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-header">
                    <h2>{ props.mode.title() }</h2>
                    <button class="btn-close" onclick={on_close_click}>{"✕"}</button>
                </div>

                <form class="product-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="product-name">{"Name"}</label>
                        <input id="product-name" type="text" value={form.name.clone()} oninput={on_field("name")} />
                        { field_error("name") }
                    </div>

                    <div class="form-group">
                        <label for="product-category">{"Category"}</label>
                        <input id="product-category" type="text" value={form.category.clone()} oninput={on_field("category")} />
                        { field_error("category") }
                    </div>

                    <div class="form-group">
                        <label for="product-description">{"Description"}</label>
                        <textarea id="product-description" value={form.description.clone()} oninput={on_field("description")} />
                        { field_error("description") }
                    </div>

                    <div class="form-group">
                        <label for="product-price">{"Price"}</label>
                        <input id="product-price" type="number" step="0.01" min="0" value={form.price.clone()} oninput={on_field("price")} />
                        { field_error("price") }
                    </div>

                    {
                        if props.mode == DialogMode::Add {
                            html! {
                                <div class="form-group">
                                    <label for="product-image">{"Image (JPEG or PNG)"}</label>
                                    <input
                                        id="product-image"
                                        type="file"
                                        accept="image/jpeg,image/png"
                                        ref={file_ref.clone()}
                                        onchange={on_file_change}
                                    />
                                    { field_error("image") }
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }

                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" onclick={props.on_close.reform(|_: MouseEvent| ())}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn-primary" disabled={*submitting}>
                            { if *submitting { "Saving..." } else { "Save" } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Create the product, then upload its image if one was picked.
/// A failed upload still counts as a successful create.
async fn create_with_image(
    payload: &ProductPayload,
    image: Option<File>,
    toast: &ToastHandle,
) -> Result<String, String> {
    let product = product_service::create_product(payload).await?;
    if let Some(file) = image {
        match product_service::upload_product_image(&product.id, &file).await {
            Ok(upload) => log::info!("🖼️ {}", upload.message),
            Err(e) => toast.error(e),
        }
    }
    Ok(format!("Product \"{}\" created.", product.name))
}
