use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{Icon, CONTACT, FOOTER_SERVICES, NAV_LINKS};
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">
                        <span class="logo-mark">{ Icon::Building.glyph() }</span>
                        <h3>{ CONTACT.company }</h3>
                    </div>
                    <p>{"Votre partenaire de confiance pour tous vos projets d'échafaudage."}</p>
                </div>
                <div>
                    <h4>{"Liens rapides"}</h4>
                    <ul>
                        { for NAV_LINKS.iter().map(|link| html! {
                            <li><a href={link.href()}>{ link.label }</a></li>
                        })}
                    </ul>
                </div>
                <div>
                    <h4>{"Services"}</h4>
                    <ul>
                        { for FOOTER_SERVICES.iter().map(|s| html! { <li>{ *s }</li> }) }
                    </ul>
                </div>
                <div>
                    <h4>{"Contact"}</h4>
                    <ul>
                        <li>{ CONTACT.phone }</li>
                        <li><a href={format!("mailto:{}", CONTACT.email)}>{ CONTACT.email }</a></li>
                        <li>{ CONTACT.area_short }</li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p>
                    { format!("© {} {}. Tous droits réservés. | ", year, CONTACT.company) }
                    <Link<Route> to={Route::LegalNotice}>{"Mentions légales"}</Link<Route>>
                    {" | "}
                    <Link<Route> to={Route::Terms}>{"CGV"}</Link<Route>>
                </p>
            </div>
        </footer>
    }
}
