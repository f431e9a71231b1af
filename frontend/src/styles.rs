use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={css!(r#"
            * { box-sizing: border-box; scroll-behavior: smooth; }

            html, body {
                margin: 0;
                background: #000;
                color: #fff;
                font-family: Inter, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            }

            ::selection { background: rgba(255, 153, 0, 0.3); color: #fff; }

            .mono { font-family: "JetBrains Mono", ui-monospace, monospace; letter-spacing: 0.2em; text-transform: uppercase; }
            .accent { color: #FF9900; }
            .muted { color: rgba(255, 255, 255, 0.2); }
            .centered { text-align: center; margin-left: auto; margin-right: auto; }
            .full-height { height: 100%; }

            .container { width: 100%; max-width: 72rem; margin: 0 auto; padding: 0 1rem; }
            .container--wide { max-width: 80rem; }

            .section { padding: 5rem 1rem; position: relative; overflow: hidden; }
            .section--dim { background: #050505; }
            .section--darker { background: #030303; }
            .section--bordered { border-top: 1px solid rgba(255, 255, 255, 0.05); border-bottom: 1px solid rgba(255, 255, 255, 0.05); }

            .section-title { font-size: 2rem; font-weight: 900; text-transform: uppercase; letter-spacing: -0.05em; line-height: 1; margin: 0 0 2rem; }
            .section-title--xl { font-size: 2.5rem; }
            .lead-copy { color: rgba(255, 255, 255, 0.4); font-size: 1rem; line-height: 1.6; max-width: 28rem; }
            .rule { height: 4px; width: 4rem; background: #FF9900; margin-bottom: 2rem; }
            .hairline { height: 1px; width: 100%; background: rgba(255, 255, 255, 0.05); margin-bottom: 3rem; }

            .text-reveal {
                background: linear-gradient(to bottom, #fff 40%, rgba(255, 255, 255, 0.4));
                -webkit-background-clip: text;
                background-clip: text;
                -webkit-text-fill-color: transparent;
                color: transparent;
                display: inline-block;
            }

            .orange-gradient {
                background: linear-gradient(135deg, #FF9900 0%, #FF6600 100%);
                -webkit-background-clip: text;
                background-clip: text;
                -webkit-text-fill-color: transparent;
                color: transparent;
                display: inline-block;
            }

            .reveal {
                opacity: 0;
                transform: translateY(2rem);
                transition: opacity 1000ms cubic-bezier(0.16, 1, 0.3, 1), transform 1000ms cubic-bezier(0.16, 1, 0.3, 1);
            }
            .reveal--shown { opacity: 1; transform: translateY(0); }

            .badge-premium {
                display: inline-block;
                padding: 0.4rem 1rem;
                border: 1px solid rgba(255, 153, 0, 0.3);
                color: #FF9900;
                font-size: 0.625rem;
                font-weight: 700;
                letter-spacing: 0.3em;
                text-transform: uppercase;
                margin: 0 0 1.5rem;
            }

            .btn-premium, .btn-outline {
                cursor: pointer;
                font-weight: 800;
                letter-spacing: 0.2em;
                text-transform: uppercase;
                padding: 0.75rem 2rem;
                font-size: 0.75rem;
                transition: all 300ms ease;
            }
            .btn-premium { background: #FF9900; color: #000; border: none; }
            .btn-premium:hover { background: #FFAA33; }
            .btn-premium:disabled { opacity: 0.6; cursor: wait; }
            .btn-outline { background: transparent; color: #fff; border: 1px solid rgba(255, 255, 255, 0.1); }
            .btn-large { padding: 1.25rem 3rem; font-size: 0.875rem; }
            .btn-block { width: 100%; padding: 1.5rem; }

            .glass-card {
                position: relative;
                overflow: hidden;
                background: rgba(255, 255, 255, 0.02);
                border: 1px solid rgba(255, 255, 255, 0.08);
                backdrop-filter: blur(12px);
                padding: 2rem;
            }

            .logo { display: flex; align-items: center; gap: 0.75rem; cursor: pointer; }
            .logo__bars { display: flex; align-items: flex-end; gap: 0.3rem; height: 2rem; }
            .logo__bar { width: 0.6rem; background: #FF9900; border-radius: 999px; animation: pulse 2s ease-in-out infinite; }
            .logo__bar--short { height: 0.75rem; }
            .logo__bar--mid { height: 1.25rem; }
            .logo__bar--full { height: 100%; }
            .logo__word { font-size: 1.5rem; font-weight: 900; letter-spacing: -0.05em; }
            @keyframes pulse { 0%, 100% { opacity: 1; } 50% { opacity: 0.5; } }

            .top-nav { position: fixed; top: 0; left: 0; right: 0; z-index: 100; padding: 2.5rem 0; transition: all 500ms ease; }
            .top-nav.scrolled {
                padding: 1rem 0;
                background: rgba(0, 0, 0, 0.9);
                backdrop-filter: blur(12px);
                border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
            }
            .nav-content { max-width: 80rem; margin: 0 auto; padding: 0 2rem; display: flex; justify-content: space-between; align-items: center; }

            .hero { min-height: 100vh; display: flex; align-items: center; padding: 8rem 1rem 5rem; text-align: center; }
            .hero__title { font-size: 3rem; font-weight: 900; line-height: 1.1; text-transform: uppercase; letter-spacing: -0.05em; margin: 0 0 3rem; }
            .hero__title span { display: block; }
            .hero__subtitle { max-width: 48rem; margin: 0 auto 5rem; color: rgba(255, 255, 255, 0.5); font-size: 1.25rem; line-height: 1.6; }
            .hero__bullets { display: grid; gap: 2rem; max-width: 64rem; margin: 0 auto 6rem; text-align: left; }
            .hero__bullet { display: flex; gap: 1rem; border-left: 1px solid rgba(255, 255, 255, 0.1); padding: 1.5rem 0 0 1.5rem; }
            .hero__bullet p { margin: 0; font-size: 0.7rem; font-weight: 700; letter-spacing: 0.2em; text-transform: uppercase; color: rgba(255, 255, 255, 0.4); }
            .hero__actions { display: flex; flex-wrap: wrap; gap: 1.5rem; justify-content: center; }

            .split { display: grid; gap: 3rem; align-items: start; }
            .split--center { align-items: center; position: relative; z-index: 1; }
            .stack { display: grid; gap: 3rem; }
            .protocol { border-bottom: 1px solid rgba(255, 255, 255, 0.05); padding-bottom: 3rem; }
            .protocol h4 { font-size: 1.5rem; font-weight: 900; text-transform: uppercase; margin: 1rem 0; }
            .protocol p { color: rgba(255, 255, 255, 0.4); font-size: 0.875rem; line-height: 1.6; max-width: 24rem; }

            .grid { display: grid; gap: 2.5rem; }
            .grid--flush { gap: 0; }
            .pillar { height: 100%; display: flex; flex-direction: column; text-align: left; }
            .pillar__icon { width: 3rem; height: 3rem; display: flex; align-items: center; justify-content: center; border: 1px solid rgba(255, 255, 255, 0.05); border-radius: 999px; color: #FF9900; margin-bottom: 2rem; }
            .pillar__more { margin-top: auto; font-size: 0.6rem; font-weight: 700; letter-spacing: 0.2em; text-transform: uppercase; color: #FF9900; }

            .category { border-bottom: 1px solid rgba(255, 255, 255, 0.05); padding: 3rem; }
            .category ul, .fit-card ul { list-style: none; padding: 0; display: grid; gap: 1.5rem; }
            .category li, .fit-card li { display: flex; align-items: center; gap: 1rem; font-size: 0.7rem; font-weight: 700; letter-spacing: 0.2em; text-transform: uppercase; color: rgba(255, 255, 255, 0.5); }
            .dot { width: 0.35rem; height: 0.35rem; border-radius: 999px; background: rgba(255, 255, 255, 0.2); flex-shrink: 0; }
            .dot--accent { background: #FF9900; }

            .intermission { text-align: center; padding: 12rem 1rem; }
            .intermission__glow { position: absolute; inset: 0; background: radial-gradient(circle at center, rgba(255, 153, 0, 0.03) 0%, transparent 70%); }
            .intermission__title { font-size: 2.5rem; font-weight: 900; text-transform: uppercase; letter-spacing: -0.05em; max-width: 64rem; margin: 0 auto 5rem; line-height: 1.1; }
            .intermission__caption { font-size: 0.6rem; color: rgba(255, 255, 255, 0.2); letter-spacing: 0.5em; }

            .step__number { font-size: 3.75rem; font-weight: 900; color: rgba(255, 255, 255, 0.05); margin-bottom: 2rem; }

            .fit-card { height: 100%; border-left: 4px solid #FF9900; }
            .fit-card--incompatible { border-left-color: rgba(255, 255, 255, 0.1); opacity: 0.6; filter: grayscale(1); transition: all 500ms ease; }
            .fit-card--incompatible:hover { filter: grayscale(0); }
            .fit-card__icon { font-size: 2.5rem; margin-bottom: 2rem; }
            .fit-card h4 { font-size: 1.875rem; font-weight: 900; text-transform: uppercase; margin: 0 0 2rem; }

            .assessment__glow { position: absolute; inset: 0; background: rgba(255, 153, 0, 0.05); opacity: 0.3; pointer-events: none; }
            .form-card { padding: 2.5rem; }
            .form-card__glow { position: absolute; top: 0; right: 0; width: 10rem; height: 10rem; background: rgba(255, 153, 0, 0.05); filter: blur(64px); border-radius: 999px; }
            .lead-form { display: grid; gap: 2rem; }
            .field-row { display: grid; gap: 2rem; }
            .field__label { display: block; font-size: 0.625rem; font-weight: 700; color: rgba(255, 255, 255, 0.3); margin-bottom: 0.5rem; }
            .form-input { width: 100%; background: transparent; border: none; border-bottom: 1px solid rgba(255, 255, 255, 0.05); color: #fff; font-size: 1.25rem; padding: 0.75rem 0; outline: none; }
            .form-input:focus { border-bottom-color: #FF9900; }
            .form-input--area { height: 8rem; resize: none; font-size: 1.125rem; }
            .form-error { color: #ff6b6b; font-size: 0.875rem; }
            .form-success { text-align: center; padding: 6rem 0; }
            .form-success__badge { width: 5rem; height: 5rem; margin: 0 auto 1.5rem; border-radius: 999px; background: #FF9900; color: #000; display: flex; align-items: center; justify-content: center; font-size: 2.5rem; }
            .form-success h3 { font-size: 1.875rem; font-weight: 900; text-transform: uppercase; margin: 0 0 1rem; }
            .form-success p { color: rgba(255, 255, 255, 0.4); font-size: 0.75rem; letter-spacing: 0.4em; }

            .footer { padding: 6rem 2rem; border-top: 1px solid rgba(255, 255, 255, 0.05); background: #000; }
            .footer__inner { display: flex; flex-wrap: wrap; justify-content: space-between; gap: 3rem; }
            .footer__about { max-width: 28rem; }
            .footer__about p { color: rgba(255, 255, 255, 0.3); line-height: 1.6; }
            .footer__links { display: flex; flex-wrap: wrap; gap: 1.5rem; font-size: 0.625rem; font-weight: 700; letter-spacing: 0.2em; text-transform: uppercase; color: rgba(255, 255, 255, 0.2); }
            .footer__stamp { color: rgba(255, 255, 255, 0.4); font-size: 0.625rem; font-weight: 700; letter-spacing: 0.3em; }
            .footer__copy { color: rgba(255, 255, 255, 0.1); font-size: 0.625rem; font-weight: 700; letter-spacing: 0.2em; }

            @media (min-width: 768px) {
                .hero__title { font-size: 6rem; line-height: 0.85; }
                .hero__bullets { grid-template-columns: repeat(3, 1fr); }
                .section { padding: 15rem 1.5rem; }
                .section-title { font-size: 4.5rem; }
                .section-title--xl { font-size: 6rem; }
                .grid--2 { grid-template-columns: repeat(2, 1fr); }
                .grid--3 { grid-template-columns: repeat(3, 1fr); }
                .grid--4 { grid-template-columns: repeat(4, 1fr); }
                .field-row { grid-template-columns: repeat(2, 1fr); }
                .category { border-right: 1px solid rgba(255, 255, 255, 0.05); }
            }

            @media (min-width: 1024px) {
                .split { grid-template-columns: repeat(2, 1fr); gap: 10rem; }
                .form-card { padding: 4rem; }
            }

            @media (max-width: 640px) {
                .text-reveal, .orange-gradient { display: block; }
            }
        "#)} />
    }
}
