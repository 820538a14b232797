//! Property tests for the factory laws: uniqueness, override precedence,
//! batch size and reset.

use grc_fixtures::{Fixtures, OrganizationFactory, UserFactory};
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    /// A batch has exactly the requested length and no repeated default ids
    #[test]
    fn batch_size_law(count in 0usize..200) {
        let mut fixtures = Fixtures::new();
        let orgs = OrganizationFactory::new().create_batch(&mut fixtures, count);
        let users = UserFactory::new().create_batch(&mut fixtures, count);

        prop_assert_eq!(orgs.len(), count);
        prop_assert_eq!(users.len(), count);

        let org_ids: HashSet<_> = orgs.iter().map(|o| o.id.clone()).collect();
        let user_ids: HashSet<_> = users.iter().map(|u| u.id.clone()).collect();
        prop_assert_eq!(org_ids.len(), count);
        prop_assert_eq!(user_ids.len(), count);
    }

    /// Overridden string fields come back exactly as given
    #[test]
    fn string_overrides_are_returned_verbatim(
        id in ".*",
        email in ".*",
        name in ".*",
        organization_id in ".*",
    ) {
        let mut fixtures = Fixtures::new();
        let user = UserFactory::new()
            .with_id(&id)
            .with_email(&email)
            .with_first_name(&name)
            .with_organization_id(&organization_id)
            .create(&mut fixtures);
        prop_assert_eq!(&user.id, &id);
        prop_assert_eq!(&user.email, &email);
        prop_assert_eq!(&user.first_name, &name);
        prop_assert_eq!(&user.organization_id, &organization_id);

        let org = OrganizationFactory::new()
            .with_id(&id)
            .with_name(&name)
            .create(&mut fixtures);
        prop_assert_eq!(&org.id, &id);
        prop_assert_eq!(&org.name, &name);
    }

    /// However far the sequences have advanced, reset brings back org-1/user-1
    #[test]
    fn reset_returns_to_first_ids(orgs in 0usize..50, users in 0usize..50) {
        let mut fixtures = Fixtures::new();
        let _ = OrganizationFactory::new().create_batch(&mut fixtures, orgs);
        let _ = UserFactory::new().create_batch(&mut fixtures, users);

        fixtures.reset();

        prop_assert_eq!(OrganizationFactory::new().create(&mut fixtures).id, "org-1");
        prop_assert_eq!(UserFactory::new().create(&mut fixtures).id, "user-1");
    }
}
