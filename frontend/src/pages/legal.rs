use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::CONTACT;
use crate::Route;

fn legal_links() -> Html {
    html! {
        <div class="legal-links">
            <Link<Route> to={Route::Home}>{"Accueil"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::LegalNotice}>{"Mentions légales"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Terms}>{"CGV"}</Link<Route>>
        </div>
    }
}

#[function_component(LegalNotice)]
pub fn legal_notice() -> Html {
    html! {
        <div class="legal-content">
            <h1>{"Mentions légales"}</h1>

            <section>
                <h2>{"1. Éditeur du site"}</h2>
                <p>{ format!("Le site {} est édité par {}.", config::base_url(), CONTACT.company) }</p>
                <p>{ format!("Téléphone : {}", CONTACT.phone) }</p>
                <p>{ format!("Email : {}", CONTACT.email) }</p>
            </section>

            <section>
                <h2>{"2. Données personnelles"}</h2>
                <p>{"Le formulaire de contact ne stocke aucune donnée. Votre demande est transmise par votre propre messagerie à l'adresse ci-dessus."}</p>
            </section>

            <section>
                <h2>{"3. Propriété intellectuelle"}</h2>
                <p>{"Les textes et visuels de ce site sont la propriété d'AMR Échafaudage. Toute reproduction sans autorisation est interdite."}</p>
            </section>
            { legal_links() }
        </div>
    }
}

#[function_component(TermsOfSale)]
pub fn terms_of_sale() -> Html {
    html! {
        <div class="legal-content">
            <h1>{"Conditions générales de vente"}</h1>

            <section>
                <h2>{"1. Devis"}</h2>
                <p>{"Tout devis est gratuit et valable 30 jours. Les travaux débutent après acceptation signée du devis."}</p>
            </section>

            <section>
                <h2>{"2. Location et mise à disposition"}</h2>
                <ul>
                    <li>{"La durée de location court de la date de montage à la date de démontage"}</li>
                    <li>{"Le matériel reste la propriété d'AMR Échafaudage"}</li>
                    <li>{"Toute modification de la structure doit être réalisée par nos équipes"}</li>
                </ul>
            </section>

            <section>
                <h2>{"3. Sécurité"}</h2>
                <p>{"Les échafaudages sont montés et réceptionnés conformément aux normes en vigueur. Le client s'engage à en respecter les consignes d'utilisation."}</p>
            </section>

            <section>
                <h2>{"4. Contact"}</h2>
                <p>{ format!("{} - {} - {}", CONTACT.company, CONTACT.phone, CONTACT.email) }</p>
            </section>
            { legal_links() }
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="legal-content">
            <h1>{"Page introuvable"}</h1>
            <p>{"La page demandée n'existe pas."}</p>
            { legal_links() }
        </div>
    }
}
