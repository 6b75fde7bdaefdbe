use yew::prelude::*;

const WHATSAPP_URL: &str = "https://wa.me/919368842663";

#[function_component(FloatingWhatsApp)]
pub fn floating_whatsapp() -> Html {
    html! {
        <a
            class="floating-whatsapp"
            href={WHATSAPP_URL}
            target="_blank"
            rel="noopener noreferrer"
            aria-label="Chat with us on WhatsApp"
        >
            <img src="https://upload.wikimedia.org/wikipedia/commons/6/6b/WhatsApp.svg" alt="WhatsApp" />
            <style>
                {r#"
                .floating-whatsapp {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    width: 3.5rem;
                    height: 3.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #25d366;
                    border-radius: 50%;
                    box-shadow: 0 8px 20px rgba(37, 211, 102, 0.4);
                    z-index: 1000;
                    transition: transform 0.2s ease;
                }
                .floating-whatsapp:hover {
                    transform: scale(1.08);
                }
                .floating-whatsapp img {
                    width: 2rem;
                    height: 2rem;
                }
                "#}
            </style>
        </a>
    }
}
