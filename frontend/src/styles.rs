// Site-wide stylesheet, injected once by App
pub const GLOBAL: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
html { scroll-behavior: smooth; }
body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    background: #f8fafc;
    color: #0f172a;
}
a { color: inherit; text-decoration: none; }

.top-nav {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 50;
    background: rgba(15, 23, 42, 0.95);
    transition: all 0.3s ease;
}
.top-nav.scrolled {
    background: #0f172a;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
}
.nav-content {
    max-width: 1280px;
    margin: 0 auto;
    padding: 0 1.5rem;
    height: 80px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo { display: flex; align-items: center; gap: 0.75rem; }
.logo-mark {
    width: 48px;
    height: 48px;
    display: inline-flex;
    align-items: center;
    justify-content: center;
    border-radius: 8px;
    background: linear-gradient(135deg, #f97316, #ea580c);
    font-size: 1.5rem;
}
.logo-name { display: block; color: #fff; font-size: 1.5rem; font-weight: 700; }
.logo-tagline { display: block; color: #fb923c; font-size: 0.75rem; }
.nav-right { display: flex; align-items: center; gap: 2rem; }
.nav-link { color: #e2e8f0; transition: color 0.2s; }
.nav-link:hover { color: #fb923c; }
.nav-cta, .btn-primary {
    background: #f97316;
    color: #fff;
    padding: 0.75rem 1.5rem;
    border-radius: 8px;
    font-weight: 600;
    transition: transform 0.2s, background 0.2s;
}
.nav-cta:hover, .btn-primary:hover { background: #ea580c; transform: scale(1.05); }
.burger-menu {
    display: none;
    background: none;
    border: none;
    color: #fff;
    font-size: 1.5rem;
    cursor: pointer;
}

.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding-top: 80px;
    background: linear-gradient(135deg, #0f172a, #1e293b, #0f172a);
    text-align: center;
    color: #fff;
    overflow: hidden;
}
.hero-pattern {
    position: absolute;
    inset: 0;
    opacity: 0.2;
    background-image: repeating-linear-gradient(45deg, rgba(255,255,255,0.15) 0 2px, transparent 2px 30px);
}
.hero-content { position: relative; max-width: 960px; padding: 0 1.5rem; }
.hero-badge {
    display: inline-block;
    background: rgba(249, 115, 22, 0.2);
    color: #fb923c;
    border: 1px solid rgba(249, 115, 22, 0.3);
    padding: 0.5rem 1rem;
    border-radius: 999px;
    font-size: 0.875rem;
    font-weight: 600;
}
.hero h1 { font-size: 4rem; line-height: 1.1; margin: 2rem 0; }
.accent { color: #fb923c; }
.hero-lead { font-size: 1.5rem; color: #cbd5e1; }
.hero-actions { display: flex; gap: 1rem; justify-content: center; margin-top: 2rem; flex-wrap: wrap; }
.btn-secondary {
    background: rgba(51, 65, 85, 0.5);
    border: 1px solid #475569;
    color: #fff;
    padding: 0.75rem 1.5rem;
    border-radius: 8px;
    font-weight: 600;
}
.hero-stats { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; margin-top: 3rem; }
.hero-stat-value { font-size: 2.25rem; font-weight: 700; color: #fb923c; }
.hero-stat-label { color: #94a3b8; font-size: 0.875rem; }

.section { padding: 5rem 1.5rem; }
.section.light { background: #fff; }
.section.muted { background: #f8fafc; }
.section.dark { background: #0f172a; color: #fff; }
.section-header { text-align: center; margin-bottom: 4rem; }
.section-header h2 { font-size: 3rem; margin-bottom: 1rem; }
.section-header p { font-size: 1.25rem; color: #64748b; }
.card-grid, .review-grid, .gallery-grid {
    max-width: 1280px;
    margin: 0 auto;
    display: grid;
    gap: 2rem;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
}
.gallery-grid { grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 1.5rem; }

.service-card {
    background: #f8fafc;
    border: 2px solid transparent;
    border-radius: 16px;
    padding: 2rem;
    cursor: pointer;
    transition: all 0.3s ease;
}
.service-card.active {
    background: #fff;
    border-color: #f97316;
    transform: translateY(-8px);
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
}
.service-icon {
    display: inline-flex;
    padding: 1rem;
    border-radius: 12px;
    margin-bottom: 1.5rem;
    background: #ffedd5;
    font-size: 2rem;
}
.service-icon.active { background: #f97316; }
.service-card h3 { margin-bottom: 0.75rem; }
.service-card p { color: #475569; }

.split {
    max-width: 1280px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
    align-items: center;
}
.split h2 { font-size: 3rem; margin-bottom: 1.5rem; }
.lead { font-size: 1.25rem; color: #cbd5e1; margin-bottom: 2rem; }
.check-line { display: flex; gap: 0.75rem; margin-bottom: 1rem; color: #e2e8f0; }
.video-placeholder {
    aspect-ratio: 16 / 9;
    background: #1e293b;
    border: 1px solid #334155;
    border-radius: 16px;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    color: #94a3b8;
}
.play-button {
    width: 80px;
    height: 80px;
    border-radius: 50%;
    background: #f97316;
    margin-bottom: 1rem;
}

.gallery-tile {
    position: relative;
    aspect-ratio: 1;
    border-radius: 16px;
    overflow: hidden;
    background: linear-gradient(135deg, #334155, #0f172a);
    display: flex;
    align-items: flex-end;
}
.gallery-caption { padding: 1.5rem; color: #fff; }
.gallery-caption p { color: #fb923c; font-size: 0.875rem; }

.benefit {
    display: flex;
    gap: 1rem;
    padding: 1.5rem;
    background: #f8fafc;
    border-radius: 12px;
    transition: box-shadow 0.2s;
}
.benefit:hover { box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
.benefit-icon {
    width: 48px;
    height: 48px;
    flex-shrink: 0;
    border-radius: 8px;
    background: #ffedd5;
    display: flex;
    align-items: center;
    justify-content: center;
}

.rating-badge { display: flex; gap: 0.5rem; justify-content: center; align-items: center; color: #cbd5e1; }
.stars { color: #fb923c; letter-spacing: 2px; }
.review-card {
    background: #1e293b;
    border: 1px solid #334155;
    border-radius: 16px;
    padding: 2rem;
}
.review-text { color: #cbd5e1; font-style: italic; margin: 1rem 0 1.5rem; }
.review-name { font-weight: 600; }
.review-company { color: #94a3b8; font-size: 0.875rem; }
.review-average { text-align: center; color: #94a3b8; margin-top: 2rem; }

.team-card {
    background: #fff;
    border-radius: 16px;
    padding: 2rem;
    text-align: center;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.05);
}
.team-avatar { font-size: 3rem; margin-bottom: 1rem; }
.team-role { color: #ea580c; font-weight: 600; margin: 0.25rem 0 1rem; }

.cta {
    padding: 5rem 1.5rem;
    text-align: center;
    color: #fff;
    background: linear-gradient(135deg, #f97316, #ea580c);
}
.cta h2 { font-size: 3rem; margin-bottom: 1.5rem; }
.cta p { font-size: 1.25rem; color: #ffedd5; margin-bottom: 2rem; }
.btn-light {
    display: inline-block;
    background: #fff;
    color: #ea580c;
    padding: 1.25rem 2.5rem;
    border-radius: 8px;
    font-weight: 700;
}

.contact-section { padding: 5rem 1.5rem; background: #f8fafc; }
.contact-grid {
    max-width: 1024px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
}
.contact-info h2 { font-size: 2.25rem; margin-bottom: 1.5rem; }
.contact-info > p { color: #475569; margin-bottom: 2rem; }
.contact-line { display: flex; gap: 1rem; margin-bottom: 1.5rem; }
.contact-line-title { font-weight: 600; }
.contact-line-value { color: #475569; }
.contact-form {
    background: #fff;
    border-radius: 16px;
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
    padding: 2rem;
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}
.form-field label { display: block; font-size: 0.875rem; font-weight: 600; color: #334155; margin-bottom: 0.5rem; }
.form-field input, .form-field textarea {
    width: 100%;
    padding: 0.75rem 1rem;
    border: 1px solid #cbd5e1;
    border-radius: 8px;
    font: inherit;
    resize: none;
}
.form-field input:focus, .form-field textarea:focus { outline: 2px solid #f97316; border-color: transparent; }
.form-error, .form-success { padding: 0.75rem 1rem; border-radius: 8px; font-size: 0.9rem; }
.form-error { background: #fee2e2; color: #b91c1c; }
.form-success { background: #dcfce7; color: #15803d; }
.contact-submit {
    background: #f97316;
    color: #fff;
    border: none;
    padding: 1rem;
    border-radius: 8px;
    font-size: 1.1rem;
    font-weight: 700;
    cursor: pointer;
}
.contact-submit:hover { background: #ea580c; }

.site-footer { background: #0f172a; color: #cbd5e1; padding: 3rem 1.5rem; }
.footer-grid {
    max-width: 1280px;
    margin: 0 auto 2rem;
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 2rem;
}
.footer-brand { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1rem; color: #fff; }
.site-footer h4 { color: #fff; margin-bottom: 1rem; }
.site-footer ul { list-style: none; font-size: 0.875rem; }
.site-footer li { margin-bottom: 0.5rem; }
.site-footer a:hover { color: #fb923c; }
.footer-bottom { border-top: 1px solid #1e293b; padding-top: 2rem; text-align: center; font-size: 0.875rem; }

.sticky-cta { display: none; }

.legal-content {
    min-height: 100vh;
    padding: 8rem 2rem 4rem;
    max-width: 800px;
    margin: 0 auto;
}
.legal-content h1 { font-size: 2rem; margin-bottom: 2.5rem; }
.legal-content section { background: #fff; border-radius: 12px; padding: 2rem; margin-bottom: 1.5rem; }
.legal-content h2 { color: #ea580c; font-size: 1.25rem; margin-bottom: 1rem; }
.legal-content ul { padding-left: 1.5rem; }
.legal-links { text-align: center; margin-top: 2rem; color: #64748b; }
.legal-links a { color: #ea580c; }

@media (max-width: 768px) {
    .burger-menu { display: block; }
    .nav-right { display: none; }
    .nav-right.mobile-menu-open {
        display: flex;
        flex-direction: column;
        align-items: stretch;
        gap: 0.75rem;
        position: absolute;
        top: 80px;
        left: 0;
        right: 0;
        padding: 1rem;
        background: #1e293b;
        border-top: 1px solid #334155;
    }
    .nav-cta { text-align: center; }
    .hero h1 { font-size: 3rem; }
    .split, .contact-grid, .footer-grid { grid-template-columns: 1fr; }
    .sticky-cta {
        display: block;
        position: fixed;
        bottom: 0;
        left: 0;
        right: 0;
        z-index: 40;
        padding: 1rem;
        background: #fff;
        border-top: 1px solid #e2e8f0;
    }
    .sticky-cta a {
        display: block;
        text-align: center;
        background: #f97316;
        color: #fff;
        padding: 1rem;
        border-radius: 8px;
        font-weight: 700;
    }
}
"#;
