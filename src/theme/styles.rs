//! Global CSS styles for the Solestride storefront.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Base */
  --white: hsl(0deg 0% 100%);

  /* Grays */
  --gray-100: hsl(185deg 5% 95%);
  --gray-300: hsl(190deg 5% 80%);
  --gray-500: hsl(196deg 4% 60%);
  --gray-700: hsl(220deg 5% 40%);
  --gray-900: hsl(220deg 3% 20%);

  /* Brand */
  --primary: hsl(340deg 65% 47%);
  --secondary: hsl(240deg 60% 63%);

  /* Font weights */
  --weight-normal: 500;
  --weight-medium: 600;
  --weight-bold: 800;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: 'Helvetica Neue', Helvetica, Arial, sans-serif;
  font-weight: var(--weight-normal);
  background: var(--white);
  color: var(--gray-900);
  min-height: 100vh;
}

/* === Store Header === */
.store-header {
  display: flex;
  align-items: baseline;
  gap: 2rem;
  padding: 1.5rem 2rem;
  border-bottom: 1px solid var(--gray-300);
}

.store-title {
  font-size: 1.5rem;
  font-weight: var(--weight-bold);
  color: var(--gray-900);
  text-decoration: none;
}

.store-tagline {
  font-size: 0.875rem;
  color: var(--gray-700);
}

/* === Listing Page === */
.listing {
  padding: 2rem;
}

.listing-heading {
  font-size: 1.25rem;
  font-weight: var(--weight-medium);
  margin-bottom: 1.5rem;
}

.shoe-grid {
  display: flex;
  flex-wrap: wrap;
  gap: 2rem;
}

/* === Shoe Card === */
.shoe-card-link {
  text-decoration: none;
  color: inherit;
  flex: 1 1 340px;
  max-width: 340px;
}

.shoe-card__image-wrapper {
  position: relative;
}

.shoe-card__image {
  display: block;
  width: 100%;
  height: 312px;
  object-fit: cover;
  background: var(--gray-100);
  border-radius: 16px 16px 4px 4px;
}

.shoe-card__sticker {
  position: absolute;
  top: 12px;
  right: -4px;
  padding: 8px 10px;
  border-radius: 2px;
  font-weight: var(--weight-bold);
  color: var(--white);
}

.shoe-card__row {
  display: flex;
  font-size: 1rem;
}

.shoe-card__name {
  font-weight: var(--weight-medium);
  color: var(--gray-900);
}

.shoe-card__price {
  margin-left: auto;
}

.shoe-card__colors {
  color: var(--gray-700);
}

.shoe-card__sale-price {
  margin-left: auto;
  font-weight: var(--weight-medium);
  color: var(--primary);
}

/* === Detail Page === */
.shoe-detail {
  padding: 2rem;
  max-width: 720px;
}

.shoe-detail__image {
  width: 100%;
  border-radius: 16px;
  background: var(--gray-100);
}

.shoe-detail__name {
  font-size: 1.5rem;
  font-weight: var(--weight-bold);
}

.shoe-detail__meta {
  color: var(--gray-700);
}

.back-link {
  display: inline-block;
  margin-bottom: 1rem;
  color: var(--gray-700);
  text-decoration: none;
}

.back-link:hover {
  color: var(--gray-900);
}

/* === States === */
.loading-state, .empty-state {
  padding: 4rem 2rem;
  text-align: center;
  color: var(--gray-500);
}
"#;
