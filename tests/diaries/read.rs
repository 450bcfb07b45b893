use actix_web::{http, test};
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, DbErr};

use crate::utils::{init_app, Connections};
use common::factory::{self, *};
use use_cases::diaries::types::DiaryVisible;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod read_diary {
    use super::*;

    #[actix_web::test]
    async fn happy_path() -> Result<(), DbErr> {
        let Connections { app, db, .. } = init_app().await?;
        let now = Utc::now().fixed_offset();
        let later = factory::diary()
            .date(date(2024, 8, 28))
            .text("later")
            .created_at(now)
            .insert(&db)
            .await?;
        let earlier = factory::diary()
            .date(date(2024, 8, 28))
            .text("earlier")
            .created_at(now - Duration::minutes(5))
            .insert(&db)
            .await?;
        let _other_date = factory::diary()
            .date(date(2024, 8, 29))
            .insert(&db)
            .await?;

        let req = test::TestRequest::get()
            .uri("/read/diary?date=2024-08-28")
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);

        let returned: Vec<DiaryVisible> = test::read_body_json(res).await;
        let expected: Vec<DiaryVisible> = vec![earlier.into(), later.into()];
        assert_eq!(returned, expected);

        Ok(())
    }

    #[actix_web::test]
    async fn created_diary_can_be_read_back() -> Result<(), DbErr> {
        let Connections { app, .. } = init_app().await?;

        let req = test::TestRequest::post()
            .uri("/create/diary?date=2024-08-28")
            .set_payload("오늘은 날씨가 좋다.")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);

        let req = test::TestRequest::get()
            .uri("/read/diary?date=2024-08-28")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);

        let returned: Vec<DiaryVisible> = test::read_body_json(res).await;
        assert_eq!(returned.len(), 1);
        assert_eq!(returned[0].date, date(2024, 8, 28));
        assert_eq!(returned[0].text, "오늘은 날씨가 좋다.");

        Ok(())
    }

    #[actix_web::test]
    async fn empty_date_returns_empty_array() -> Result<(), DbErr> {
        let Connections { app, .. } = init_app().await?;

        let req = test::TestRequest::get()
            .uri("/read/diary?date=2024-08-28")
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);

        let returned: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(returned, serde_json::json!([]));

        Ok(())
    }

    #[actix_web::test]
    async fn malformed_date() -> Result<(), DbErr> {
        let Connections { app, .. } = init_app().await?;

        let req = test::TestRequest::get()
            .uri("/read/diary?date=yesterday")
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod read_diaries {
    use super::*;

    #[actix_web::test]
    async fn range_is_inclusive() -> Result<(), DbErr> {
        let Connections { app, db, .. } = init_app().await?;
        let _before = factory::diary()
            .date(date(2024, 8, 27))
            .insert(&db)
            .await?;
        let last = factory::diary()
            .date(date(2024, 8, 30))
            .text("last")
            .insert(&db)
            .await?;
        let first = factory::diary()
            .date(date(2024, 8, 28))
            .text("first")
            .insert(&db)
            .await?;
        let _after = factory::diary()
            .date(date(2024, 8, 31))
            .insert(&db)
            .await?;

        let req = test::TestRequest::get()
            .uri("/read/diaries?startDate=2024-08-28&endDate=2024-08-30")
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);

        let returned: Vec<DiaryVisible> = test::read_body_json(res).await;
        let expected: Vec<DiaryVisible> = vec![first.into(), last.into()];
        assert_eq!(returned, expected);

        Ok(())
    }

    #[actix_web::test]
    async fn single_day_range() -> Result<(), DbErr> {
        let Connections { app, db, .. } = init_app().await?;
        let diary = factory::diary()
            .date(date(2024, 8, 28))
            .insert(&db)
            .await?;

        let req = test::TestRequest::get()
            .uri("/read/diaries?startDate=2024-08-28&endDate=2024-08-28")
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);

        let returned: Vec<DiaryVisible> = test::read_body_json(res).await;
        assert_eq!(returned, vec![DiaryVisible::from(diary)]);

        Ok(())
    }

    #[actix_web::test]
    async fn range_across_far_future_years() -> Result<(), DbErr> {
        let Connections { app, db, .. } = init_app().await?;
        let diary = factory::diary()
            .date(date(3050, 12, 31))
            .insert(&db)
            .await?;

        let req = test::TestRequest::get()
            .uri("/read/diaries?startDate=3050-12-01&endDate=3051-01-01")
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);

        let returned: Vec<DiaryVisible> = test::read_body_json(res).await;
        assert_eq!(returned, vec![DiaryVisible::from(diary)]);

        Ok(())
    }

    #[actix_web::test]
    async fn reversed_range() -> Result<(), DbErr> {
        let Connections { app, .. } = init_app().await?;

        let req = test::TestRequest::get()
            .uri("/read/diaries?startDate=2024-08-30&endDate=2024-08-28")
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[actix_web::test]
    async fn missing_end_date() -> Result<(), DbErr> {
        let Connections { app, .. } = init_app().await?;

        let req = test::TestRequest::get()
            .uri("/read/diaries?startDate=2024-08-28")
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

        Ok(())
    }
}
