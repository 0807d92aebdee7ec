//! Global CSS for the portfolio screens.
//!
//! Colors, spacing, radii and gradients come from the `:root` variables
//! emitted by `folio_core::theme::css_variables`; this sheet only lays
//! things out. The story feed reads its colors from the `--feed-*`
//! variables set inline on the feed container.

pub const GLOBAL_STYLES: &str = r#"
/* === Base === */
* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  font-size: var(--font-body-size);
  color: var(--text-primary);
  background: var(--background-pure);
  -webkit-font-smoothing: antialiased;
}

button {
  font: inherit;
  border: none;
  background: none;
  color: inherit;
  cursor: pointer;
}

img {
  display: block;
}

/* === Gradients === */
.gradient-background {
  background: var(--gradient-background);
}

.gradient-red {
  background: var(--gradient-red);
}

.gradient-red-horizontal {
  background: linear-gradient(90deg, var(--primary), var(--primary-dark));
}

.gradient-accent {
  background: var(--gradient-accent);
}

/* === Screen layout === */
.screen-root {
  position: relative;
  height: 100vh;
  overflow: hidden;
}

.screen {
  height: 100%;
}

.screen-scroll {
  height: 100%;
  overflow-y: auto;
  padding: var(--space-lg) var(--space-md) 0;
}

.bottom-spacer {
  height: 110px;
}

.section {
  margin-top: var(--space-lg);
}

.section-header {
  display: flex;
  align-items: center;
  gap: var(--space-sm);
  margin-bottom: var(--space-md);
}

.section-title {
  font-size: var(--font-h2-size);
  font-weight: var(--font-h2-weight);
  letter-spacing: var(--font-h2-tracking);
}

.section-title--standalone {
  margin: var(--space-lg) 0 var(--space-md);
}

.screen-header {
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
  padding: var(--space-lg) 0 var(--space-md);
}

.screen-header__icon {
  width: 72px;
  height: 72px;
  border-radius: var(--radius-full);
  display: flex;
  align-items: center;
  justify-content: center;
  box-shadow: 0 8px 24px var(--shadow);
  margin-bottom: var(--space-md);
}

.screen-header__title {
  font-size: var(--font-h1-size);
  font-weight: var(--font-h1-weight);
  letter-spacing: var(--font-h1-tracking);
}

.screen-header__subtitle {
  margin-top: var(--space-xs);
  font-size: var(--font-body-small-size);
  color: var(--text-secondary);
}

/* === Glass cards === */
.glass-card {
  position: relative;
  overflow: hidden;
  border-radius: var(--radius-lg);
  margin-bottom: var(--space-md);
}

.glass-card__blur {
  position: absolute;
  inset: 0;
}

.glass-card__content {
  position: relative;
  padding: var(--space-lg);
  border-radius: var(--radius-lg);
}

.glass-card--light {
  color: var(--text-on-light);
}

.glass-card--light .bio-text,
.glass-card--light .stat-label,
.glass-card--light .nav-card__subtitle,
.glass-card--light .project-description,
.glass-card--light .info-text {
  color: rgba(10, 10, 10, 0.7);
}

/* === Profile === */
.profile-section {
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: var(--space-xl) 0 var(--space-lg);
}

.photo-ring {
  width: 160px;
  height: 160px;
  border-radius: var(--radius-full);
  padding: 4px;
  box-shadow: 0 12px 32px var(--shadow);
}

.photo-inner {
  width: 100%;
  height: 100%;
  border-radius: var(--radius-full);
  background: var(--background-dark);
  display: flex;
  align-items: center;
  justify-content: center;
}

.photo-monogram {
  font-size: 48px;
  font-weight: 800;
  letter-spacing: 2px;
}

.profile-name {
  margin-top: var(--space-md);
  font-size: var(--font-h1-size);
  font-weight: var(--font-h1-weight);
  letter-spacing: var(--font-h1-tracking);
}

.title-badge {
  margin-top: var(--space-sm);
  padding: var(--space-xs) var(--space-md);
  border-radius: var(--radius-full);
}

.title-badge__text {
  font-size: var(--font-body-small-size);
  font-weight: 600;
}

.card-row {
  display: flex;
  align-items: center;
  gap: var(--space-sm);
  margin-bottom: var(--space-sm);
}

.card-title {
  font-size: var(--font-h3-size);
  font-weight: var(--font-h3-weight);
}

.bio-text {
  line-height: 1.6;
  color: var(--text-secondary);
}

/* === Stats === */
.stats-row {
  display: flex;
  gap: var(--space-sm);
}

.stat-card {
  flex: 1;
}

.stat-card .glass-card__content {
  padding: var(--space-md) var(--space-sm);
  text-align: center;
}

.stat-number {
  font-size: var(--font-h2-size);
  font-weight: 800;
}

.stat-label {
  font-size: var(--font-caption-size);
  color: var(--text-secondary);
}

/* === Explore cards === */
.nav-card-touch {
  cursor: pointer;
}

.nav-card-touch:active {
  opacity: 0.8;
}

.nav-card__content {
  display: flex;
  align-items: center;
  gap: var(--space-md);
}

.nav-icon-bg {
  width: 56px;
  height: 56px;
  flex-shrink: 0;
  border-radius: var(--radius-md);
  display: flex;
  align-items: center;
  justify-content: center;
}

.nav-icon-bg--white {
  background: var(--white);
}

.nav-card__text {
  flex: 1;
}

.nav-card__title {
  font-size: var(--font-h3-size);
  font-weight: var(--font-h3-weight);
}

.nav-card__subtitle {
  font-size: var(--font-body-small-size);
  color: var(--text-secondary);
}

/* === Contact === */
.contact-title {
  text-align: center;
  font-size: var(--font-h3-size);
  font-weight: var(--font-h3-weight);
  margin-bottom: var(--space-md);
}

.contact-icons {
  display: flex;
  justify-content: center;
  gap: var(--space-md);
}

.contact-icon-btn {
  width: 52px;
  height: 52px;
  border-radius: var(--radius-full);
  display: flex;
  align-items: center;
  justify-content: center;
}

/* === Icons, tags and progress === */
.icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  line-height: 1;
}

.tag-list {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-sm);
}

.tag {
  display: inline-flex;
  align-items: center;
  gap: 6px;
  padding: 6px 12px;
  border-radius: var(--radius-full);
  background: var(--glass-light);
  border: 1px solid var(--glass-border);
  font-size: var(--font-caption-size);
}

.tag--on-light {
  border-color: rgba(10, 10, 10, 0.2);
}

.tag__dot {
  width: 8px;
  height: 8px;
  border-radius: var(--radius-full);
}

.label-caps {
  font-size: var(--font-caption-size);
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 1px;
  color: var(--text-secondary);
  margin-bottom: var(--space-sm);
}

.progress-track {
  height: 8px;
  border-radius: var(--radius-full);
  background: rgba(255, 255, 255, 0.1);
  overflow: hidden;
}

.progress-fill {
  height: 100%;
  border-radius: var(--radius-full);
  background: var(--gradient-red);
}

.divider {
  height: 1px;
  background: var(--glass-border);
  margin: var(--space-md) 0;
}

.meta-row {
  display: flex;
  align-items: center;
  gap: var(--space-sm);
  margin-bottom: var(--space-xs);
  font-size: var(--font-body-small-size);
  color: var(--text-secondary);
}

/* === Skills & education === */
.skill-card .glass-card__content {
  padding: var(--space-md);
}

.skill-header {
  display: flex;
  align-items: center;
  gap: var(--space-sm);
  margin-bottom: var(--space-sm);
}

.skill-icon {
  width: 40px;
  height: 40px;
  border-radius: var(--radius-sm);
  background: rgba(255, 255, 255, 0.1);
  display: flex;
  align-items: center;
  justify-content: center;
}

.skill-name {
  flex: 1;
  font-weight: 600;
}

.skill-level {
  font-weight: 700;
  color: var(--primary);
}

.education-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: var(--space-md);
}

.education-icon {
  width: 56px;
  height: 56px;
  border-radius: var(--radius-md);
  background: rgba(255, 255, 255, 0.15);
  display: flex;
  align-items: center;
  justify-content: center;
}

.status-badge {
  padding: var(--space-xs) 12px;
  border-radius: var(--radius-full);
  background: var(--white);
  color: var(--primary);
  font-size: var(--font-caption-size);
  font-weight: 700;
}

.degree {
  font-size: var(--font-h3-size);
  font-weight: 700;
}

.specialization {
  margin-top: var(--space-xs);
  color: var(--text-secondary);
}

.coursework {
  margin-top: var(--space-md);
}

.info-row {
  display: flex;
  align-items: flex-start;
  gap: 12px;
  margin-bottom: 12px;
}

.info-row:last-child {
  margin-bottom: 0;
}

.info-text {
  flex: 1;
  line-height: 1.5;
}

/* === Projects === */
.featured-badge {
  position: absolute;
  top: var(--space-md);
  right: var(--space-md);
  display: flex;
  align-items: center;
  gap: var(--space-xs);
  padding: var(--space-xs) 10px;
  border-radius: var(--radius-full);
}

.featured-badge__text {
  font-size: 11px;
  font-weight: 700;
  text-transform: uppercase;
}

.project-header {
  display: flex;
  align-items: center;
  gap: 12px;
  margin-bottom: 12px;
  padding-right: 96px;
}

.project-icon {
  width: 56px;
  height: 56px;
  border-radius: var(--radius-md);
  background: rgba(229, 57, 53, 0.15);
  display: flex;
  align-items: center;
  justify-content: center;
}

.project-title {
  font-size: var(--font-h3-size);
  font-weight: var(--font-h3-weight);
}

.project-description {
  line-height: 1.5;
  color: var(--text-secondary);
  margin-bottom: var(--space-md);
}

.tech-stack {
  margin-bottom: var(--space-md);
}

.project-actions {
  display: flex;
  gap: 12px;
}

.project-actions > button {
  flex: 1;
}

.coming-soon {
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
  gap: var(--space-sm);
}

.coming-soon__title {
  font-size: var(--font-h3-size);
  font-weight: var(--font-h3-weight);
}

.coming-soon__text {
  color: var(--text-secondary);
}

/* === Certifications === */
.summary {
  display: flex;
  align-items: center;
  justify-content: space-around;
}

.summary__item {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-xs);
}

.summary__number {
  font-size: var(--font-h2-size);
  font-weight: 800;
}

.summary__label {
  font-size: var(--font-caption-size);
  color: var(--text-secondary);
}

.summary__divider {
  width: 1px;
  height: 48px;
  background: var(--glass-border);
}

.cert-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: var(--space-md);
}

.cert-icon {
  width: 64px;
  height: 64px;
  border-radius: var(--radius-md);
  display: flex;
  align-items: center;
  justify-content: center;
}

.cert-badge {
  display: flex;
  align-items: center;
  gap: var(--space-xs);
  padding: var(--space-xs) 10px;
  border-radius: var(--radius-full);
  background: var(--white);
}

.cert-badge__text {
  font-size: 11px;
  font-weight: 700;
  color: var(--primary);
}

.cert-title {
  font-size: var(--font-h3-size);
  font-weight: var(--font-h3-weight);
  margin-bottom: 12px;
}

.skills-covered {
  margin-bottom: var(--space-md);
}

.in-progress + .in-progress {
  margin-top: var(--space-md);
}

.in-progress__row {
  display: flex;
  align-items: center;
  gap: 12px;
  margin-bottom: 12px;
}

.in-progress__icon {
  width: 48px;
  height: 48px;
  border-radius: var(--radius-sm);
  background: rgba(255, 255, 255, 0.1);
  display: flex;
  align-items: center;
  justify-content: center;
}

.in-progress__info {
  flex: 1;
}

.in-progress__title {
  font-weight: 600;
}

.in-progress__issuer {
  font-size: var(--font-body-small-size);
  color: var(--text-secondary);
}

.progress-badge {
  padding: var(--space-xs) 10px;
  border-radius: var(--radius-full);
  background: var(--primary);
  font-size: var(--font-caption-size);
  font-weight: 700;
}

/* === Buttons === */
.btn-gradient,
.btn-outline {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-sm);
  padding: 12px var(--space-md);
  border-radius: var(--radius-md);
  font-size: var(--font-button-size);
  font-weight: var(--font-button-weight);
  letter-spacing: var(--font-button-tracking);
}

.btn-gradient {
  background: var(--gradient-red);
  box-shadow: 0 4px 12px var(--shadow);
}

.btn-outline {
  background: var(--glass-light);
  border: 1px solid var(--glass-border);
}

.btn-block {
  width: 100%;
}

.btn-plain {
  padding: var(--space-sm) var(--space-md);
  border-radius: var(--radius-sm);
  background: #2196F3;
  color: var(--white);
  font-weight: 500;
  text-transform: uppercase;
}

.btn-touchable:active {
  opacity: 0.2;
}

.btn-gradient:disabled,
.btn-outline:disabled,
.btn-plain:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.pressable {
  cursor: pointer;
  user-select: none;
}

/* === Tab bar === */
.tab-bar-container {
  position: absolute;
  left: var(--space-md);
  right: var(--space-md);
  bottom: 20px;
  height: 70px;
  border-radius: 35px;
  overflow: hidden;
  border: 1px solid var(--glass-border);
  box-shadow: 0 8px 32px rgba(0, 0, 0, 0.5);
}

.tab-bar-blur {
  position: absolute;
  inset: 0;
  background: rgba(10, 10, 10, 0.85);
  backdrop-filter: blur(var(--blur-tab-bar));
  -webkit-backdrop-filter: blur(var(--blur-tab-bar));
}

.tab-bar {
  position: relative;
  height: 100%;
  display: flex;
  align-items: center;
  justify-content: space-around;
}

.tab-item {
  position: relative;
  width: 56px;
  height: 56px;
  display: flex;
  align-items: center;
  justify-content: center;
}

.tab-active-bg,
.tab-inactive-bg {
  width: 50px;
  height: 50px;
  border-radius: var(--radius-full);
  display: flex;
  align-items: center;
  justify-content: center;
}

.tab-active-bg {
  background: var(--gradient-red);
  color: var(--white);
  box-shadow: 0 4px 12px var(--shadow);
}

.tab-inactive-bg {
  color: var(--text-secondary);
}

.tab-touch-area {
  position: absolute;
  inset: 0;
  border-radius: var(--radius-full);
  cursor: pointer;
}

/* === Alert dialog === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.5);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
}

.alert-dialog {
  width: 280px;
  padding: var(--space-lg) var(--space-lg) var(--space-sm);
  border-radius: var(--radius-sm);
  background: var(--white);
  color: var(--text-on-light);
  box-shadow: 0 12px 40px rgba(0, 0, 0, 0.4);
}

.alert-dialog__title {
  font-size: var(--font-h3-size);
  font-weight: 600;
  margin-bottom: var(--space-sm);
}

.alert-dialog__message {
  color: rgba(10, 10, 10, 0.7);
}

.alert-dialog__actions {
  display: flex;
  justify-content: flex-end;
  margin-top: var(--space-md);
}

.alert-dialog__ok {
  padding: var(--space-sm);
  color: #2196F3;
  font-weight: 600;
}

/* === Story feed === */
.feed {
  height: 100vh;
  display: flex;
  flex-direction: column;
  background: var(--feed-bg);
  color: var(--feed-text);
}

.feed-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 12px var(--space-md);
  background: var(--feed-surface);
  border-bottom: 1px solid var(--feed-border);
}

.feed-header__title {
  font-size: var(--font-h2-size);
  font-weight: 700;
}

.mode-indicator {
  padding: 6px 12px;
  border-radius: var(--radius-full);
  border: 1px solid var(--feed-border);
  background: var(--feed-card);
}

.mode-indicator__text {
  font-size: var(--font-body-small-size);
  color: var(--feed-text-secondary);
}

.feed-scroll {
  flex: 1;
  overflow-y: auto;
}

.stories-row {
  display: flex;
  gap: 12px;
  padding: 12px var(--space-md);
  overflow-x: auto;
  border-bottom: 1px solid var(--feed-border);
}

.story {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-xs);
  flex-shrink: 0;
  width: 72px;
}

.story__ring {
  width: 68px;
  height: 68px;
  border-radius: var(--radius-full);
  padding: 2px;
  border: 2px solid var(--feed-border);
}

.story__ring--active {
  border-color: var(--feed-accent);
}

.story__image {
  width: 100%;
  height: 100%;
  border-radius: var(--radius-full);
  object-fit: cover;
  border: 2px solid var(--feed-bg);
}

.story__label {
  max-width: 72px;
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
  font-size: var(--font-caption-size);
  color: var(--feed-text-secondary);
}

.post {
  background: var(--feed-card);
  border-bottom: 1px solid var(--feed-border);
  padding-bottom: 12px;
}

.post__header {
  display: flex;
  align-items: center;
  gap: 10px;
  padding: 10px var(--space-md);
}

.post__avatar {
  width: 32px;
  height: 32px;
  border-radius: var(--radius-full);
  object-fit: cover;
}

.post__username {
  font-weight: 600;
}

.post__image {
  width: 100%;
  aspect-ratio: 1 / 1;
  object-fit: cover;
}

.post__actions {
  display: flex;
  gap: var(--space-md);
  padding: 10px var(--space-md) var(--space-xs);
  font-size: 22px;
  color: var(--feed-icon);
}

.post__likes {
  padding: 0 var(--space-md);
  font-weight: 600;
}

.post__caption {
  padding: var(--space-xs) var(--space-md) 0;
  line-height: 1.4;
}

.post__caption-user {
  font-weight: 600;
}

.post__time {
  padding: var(--space-xs) var(--space-md) 0;
  font-size: var(--font-caption-size);
  color: var(--feed-text-muted);
}

/* === Sampler === */
.sampler {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: var(--space-lg);
  background: var(--white);
  color: var(--text-on-light);
}

.sampler__greeting {
  font-size: 30px;
  color: blue;
}

.sampler__image {
  width: 200px;
  height: 200px;
  object-fit: cover;
}

.sampler__touch-text,
.sampler__pressable {
  font-size: 18px;
  color: var(--primary);
}
"#;
