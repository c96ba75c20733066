use shared::ImageCapture;
use yew::prelude::*;

pub fn render_image_grid(images: &[ImageCapture], loading: bool) -> Html {
    html! {
        <div class="card image-grid">
            <div class="card-header">
                <h3>{ format!("Captured Images ({})", images.len()) }</h3>
            </div>
            <div class="image-grid-body">
                {
                    images.iter().map(|image| {
                        html! {
                            <div class="image-tile" key={image.id.clone()}>
                                <img src={image.url.clone()} alt={format!("Scan {}", image.id)} />
                                <div class="image-caption">
                                    <p class="image-timestamp">{ &image.timestamp }</p>
                                    <p class="image-id">{ format!("ID: {}", image.id) }</p>
                                </div>
                            </div>
                        }
                    }).collect::<Html>()
                }
                {
                    if loading {
                        html! { <div class="image-tile image-tile-pending"><span class="spinner"></span></div> }
                    } else {
                        html! {}
                    }
                }
            </div>
            {
                if images.is_empty() && !loading {
                    html! { <p class="image-grid-empty">{"No images captured yet"}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
